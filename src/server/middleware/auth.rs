//! Permission checks run at the start of every protected handler.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::status::UserRole,
    server::{
        data::{
            campaign::CampaignRepository, influencer::InfluencerRepository,
            invitation::InvitationRepository, user::UserRepository,
        },
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::user::User,
    },
};

/// A requirement the current user must satisfy.
#[derive(Debug, Clone, Copy)]
pub enum Permission {
    Admin,
    Brand,
    Influencer,
    /// Any one of the listed roles.
    AnyRole(&'static [UserRole]),
    /// Admin, or the brand user owning the campaign.
    CampaignOwner(i32),
    /// Admin, the owning brand user, or an influencer invited to the campaign.
    CampaignView(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the logged-in user after checking every permission.
    ///
    /// An empty permission list only requires a valid login.
    ///
    /// # Returns
    /// - `Ok(User)` - All permissions satisfied
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session points to a deleted user
    /// - `Err(AppError::NotFound)` - A referenced campaign doesn't exist
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match *permission {
                Permission::Admin => Self::require_role(&user, UserRole::Admin)?,
                Permission::Brand => Self::require_role(&user, UserRole::Brand)?,
                Permission::Influencer => Self::require_role(&user, UserRole::Influencer)?,
                Permission::AnyRole(roles) => {
                    if !roles.contains(&user.role) {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("Role {} is not allowed here", user.role),
                        )
                        .into());
                    }
                }
                Permission::CampaignOwner(campaign_id) => {
                    let owner = self.campaign_owner(campaign_id).await?;
                    if !user.is_admin() && owner != user.id {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("User doesn't own campaign {}", campaign_id),
                        )
                        .into());
                    }
                }
                Permission::CampaignView(campaign_id) => {
                    let owner = self.campaign_owner(campaign_id).await?;
                    if user.is_admin() || owner == user.id {
                        continue;
                    }
                    if !self.is_invited(user.id, campaign_id).await? {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("User has no view access to campaign {}", campaign_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    fn require_role(user: &User, role: UserRole) -> Result<(), AppError> {
        if user.role != role {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("User requires role {} but has {}", role, user.role),
            )
            .into());
        }

        Ok(())
    }

    async fn campaign_owner(&self, campaign_id: i32) -> Result<i32, AppError> {
        CampaignRepository::new(self.db)
            .owner_user_id(campaign_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Campaign {} not found", campaign_id)))
    }

    async fn is_invited(&self, user_id: i32, campaign_id: i32) -> Result<bool, AppError> {
        let Some(influencer) = InfluencerRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
        else {
            return Ok(false);
        };

        let invitation = InvitationRepository::new(self.db)
            .find_by_campaign_and_influencer(campaign_id, influencer.id)
            .await?;

        Ok(invitation.is_some())
    }
}
