//! Memoranda of understanding attached to campaigns.
//!
//! An MOU needs sign-off from one admin, the brand owner and every influencer
//! taking part. Any rejection rejects the document; replacing the document
//! clears every decision.

use sea_orm::DatabaseConnection;

use crate::{
    model::status::{CampaignStatus, MouDecision, MouStatus},
    server::{
        data::{campaign::CampaignRepository, invitation::InvitationRepository, mou::MouRepository},
        error::{auth::AuthError, AppError},
        model::{
            mou::{Mou, PendingParty, RequiredParties},
            notification::{NotificationContent, NotificationKind},
            user::User,
        },
        service::{campaign::campaign_link, notification::NotificationService},
    },
};

pub struct MouService<'a> {
    db: &'a DatabaseConnection,
    app_url: &'a str,
}

impl<'a> MouService<'a> {
    pub fn new(db: &'a DatabaseConnection, app_url: &'a str) -> Self {
        Self { db, app_url }
    }

    /// Gets a campaign's MOU and the parties whose approval is still outstanding.
    pub async fn get(&self, campaign_id: i32) -> Result<(Mou, Vec<PendingParty>), AppError> {
        let mou = self.find(campaign_id).await?;
        let parties = self.required_parties(campaign_id).await?;
        let pending = parties.pending(&mou.approvals);

        Ok((mou, pending))
    }

    /// Creates or replaces a campaign's MOU and asks every required party to review it.
    ///
    /// # Returns
    /// - `Ok((Mou, pending))` - The stored MOU, PENDING with no decisions
    /// - `Err(AppError::BadRequest)` - Empty title or invalid document URL
    /// - `Err(AppError::Conflict)` - The campaign has already ended
    pub async fn upsert(
        &self,
        campaign_id: i32,
        title: &str,
        document_url: &str,
    ) -> Result<(Mou, Vec<PendingParty>), AppError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::BadRequest("MOU title is required".to_string()));
        }
        let document_url = document_url.trim();
        if url::Url::parse(document_url).is_err() {
            return Err(AppError::BadRequest(
                "Document URL is not a valid URL".to_string(),
            ));
        }

        let campaign = CampaignRepository::new(self.db)
            .find_by_id(campaign_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Campaign {} not found", campaign_id)))?;
        if !matches!(
            campaign.status,
            CampaignStatus::Pending | CampaignStatus::Active
        ) {
            return Err(AppError::Conflict(format!(
                "Cannot attach an MOU to a {} campaign",
                campaign.status
            )));
        }

        let mou = MouRepository::new(self.db)
            .upsert(campaign_id, title.to_string(), document_url.to_string())
            .await?;

        let parties = self.required_parties(campaign_id).await?;

        let notifications = NotificationService::new(self.db, self.app_url);
        let content = NotificationContent::new(
            NotificationKind::MouRequested,
            "MOU awaiting your approval",
            format!("Please review the MOU {} for {}", mou.title, campaign.name),
        )
        .link(campaign_link(campaign_id));

        let mut recipients = vec![parties.brand_user_id];
        recipients.extend(&parties.influencer_user_ids);
        notifications.fan_out(&recipients, &content).await;
        notifications.notify_admins(&content).await?;

        let pending = parties.pending(&mou.approvals);

        Ok((mou, pending))
    }

    /// Records the user's decision and settles the MOU once the outcome is known.
    ///
    /// # Arguments
    /// - `user` - User deciding; their party follows from role and campaign involvement
    /// - `campaign_id` - Campaign the MOU belongs to
    /// - `approve` - `true` to approve, `false` to reject
    /// - `comment` - Optional note stored with the decision
    ///
    /// # Returns
    /// - `Ok((Mou, pending))` - The MOU with the new decision
    /// - `Err(AuthError::AccessDenied)` - The user is not a party to the MOU
    /// - `Err(AppError::Conflict)` - The MOU is settled or the user already decided
    pub async fn decide(
        &self,
        user: &User,
        campaign_id: i32,
        approve: bool,
        comment: Option<String>,
    ) -> Result<(Mou, Vec<PendingParty>), AppError> {
        let mou = self.find(campaign_id).await?;
        let parties = self.required_parties(campaign_id).await?;

        let Some(party) = parties.party_of(user.id, user.is_admin()) else {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("User is not a party to the MOU of campaign {}", campaign_id),
            )
            .into());
        };

        if mou.status != MouStatus::Pending {
            return Err(AppError::Conflict(format!(
                "The MOU is already {}",
                mou.status
            )));
        }
        if mou.approvals.iter().any(|a| a.user_id == user.id) {
            return Err(AppError::Conflict(
                "You have already decided on this MOU".to_string(),
            ));
        }

        let decision = if approve {
            MouDecision::Approved
        } else {
            MouDecision::Rejected
        };
        let comment = comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        let repo = MouRepository::new(self.db);
        let approval = repo
            .add_approval(mou.id, user.id, party, decision, comment)
            .await?;

        let mut approvals = mou.approvals.clone();
        approvals.push(approval);

        let status = parties.settle(&approvals);
        if status != MouStatus::Pending {
            repo.set_status(mou.id, status).await?;

            tracing::info!("MOU {} of campaign {} settled: {}", mou.id, campaign_id, status);

            NotificationService::new(self.db, self.app_url)
                .notify(
                    parties.brand_user_id,
                    &NotificationContent::new(
                        NotificationKind::MouSettled,
                        "MOU settled",
                        format!("The MOU {} was {}", mou.title, status.as_str().to_lowercase()),
                    )
                    .link(campaign_link(campaign_id)),
                )
                .await?;
        }

        let mou = self.find(campaign_id).await?;
        let pending = parties.pending(&mou.approvals);

        Ok((mou, pending))
    }

    async fn find(&self, campaign_id: i32) -> Result<Mou, AppError> {
        MouRepository::new(self.db)
            .find_by_campaign(campaign_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Campaign {} has no MOU", campaign_id)))
    }

    async fn required_parties(&self, campaign_id: i32) -> Result<RequiredParties, AppError> {
        let brand_user_id = CampaignRepository::new(self.db)
            .owner_user_id(campaign_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Campaign {} not found", campaign_id)))?;

        let influencer_user_ids = InvitationRepository::new(self.db)
            .participant_user_ids(campaign_id)
            .await?;

        Ok(RequiredParties {
            brand_user_id,
            influencer_user_ids,
        })
    }
}
