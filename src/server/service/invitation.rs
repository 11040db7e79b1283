//! Inviting influencers to campaigns, their responses and deliverables.

use sea_orm::DatabaseConnection;

use crate::{
    model::status::{CampaignStatus, InvitationStatus, ProfileStatus},
    server::{
        data::{
            campaign::CampaignRepository, influencer::InfluencerRepository,
            invitation::InvitationRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            campaign::Campaign,
            influencer::Influencer,
            invitation::{DeliverParam, Invitation},
            notification::{NotificationContent, NotificationKind},
            pagination::Paginated,
        },
        service::{campaign::campaign_link, notification::NotificationService},
    },
};

/// Invitations created by one call, and the influencers skipped because they
/// were already invited.
#[derive(Debug)]
pub struct InviteOutcome {
    pub invited: Vec<Invitation>,
    pub skipped: Vec<i32>,
}

pub struct InvitationService<'a> {
    db: &'a DatabaseConnection,
    app_url: &'a str,
}

impl<'a> InvitationService<'a> {
    pub fn new(db: &'a DatabaseConnection, app_url: &'a str) -> Self {
        Self { db, app_url }
    }

    /// Invites influencers to a campaign and notifies each new invitee.
    ///
    /// Duplicate IDs in the request are ignored; influencers already holding an
    /// invitation to the campaign are skipped rather than failing the request.
    ///
    /// # Arguments
    /// - `campaign_id` - Campaign to invite to
    /// - `influencer_ids` - Influencer profile IDs
    /// - `message` - Optional note shown to every invitee
    ///
    /// # Returns
    /// - `Ok(InviteOutcome)` - New invitations and the skipped influencer IDs
    /// - `Err(AppError::Conflict)` - The campaign is neither PENDING nor ACTIVE
    /// - `Err(AppError::BadRequest)` - No IDs, or an ID that isn't an approved influencer
    pub async fn invite(
        &self,
        campaign_id: i32,
        influencer_ids: &[i32],
        message: Option<String>,
    ) -> Result<InviteOutcome, AppError> {
        let campaign = self.campaign(campaign_id).await?;
        if !matches!(
            campaign.status,
            CampaignStatus::Pending | CampaignStatus::Active
        ) {
            return Err(AppError::Conflict(format!(
                "Cannot invite influencers to a {} campaign",
                campaign.status
            )));
        }

        let mut ids: Vec<i32> = Vec::with_capacity(influencer_ids.len());
        for &id in influencer_ids {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        if ids.is_empty() {
            return Err(AppError::BadRequest(
                "At least one influencer is required".to_string(),
            ));
        }

        let influencers = InfluencerRepository::new(self.db).find_by_ids(&ids).await?;
        let ineligible: Vec<String> = ids
            .iter()
            .filter(|id| {
                !influencers
                    .iter()
                    .any(|i| i.id == **id && i.status == ProfileStatus::Approved)
            })
            .map(|id| id.to_string())
            .collect();
        if !ineligible.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Influencers {} are not approved",
                ineligible.join(", ")
            )));
        }

        let message = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());

        let repo = InvitationRepository::new(self.db);
        let notifications = NotificationService::new(self.db, self.app_url);
        let mut outcome = InviteOutcome {
            invited: Vec::new(),
            skipped: Vec::new(),
        };

        for id in ids {
            if repo
                .find_by_campaign_and_influencer(campaign_id, id)
                .await?
                .is_some()
            {
                outcome.skipped.push(id);
                continue;
            }

            let invitation = repo.create(campaign_id, id, message.clone()).await?;

            if let Some(influencer) = influencers.iter().find(|i| i.id == id) {
                notifications
                    .notify(
                        influencer.user_id,
                        &NotificationContent::new(
                            NotificationKind::InvitationReceived,
                            "New campaign invitation",
                            format!("You have been invited to the campaign {}", campaign.name),
                        )
                        .link("/influencer/invitations"),
                    )
                    .await?;
            }

            outcome.invited.push(invitation);
        }

        tracing::info!(
            "Campaign {}: invited {} influencers, skipped {}",
            campaign_id,
            outcome.invited.len(),
            outcome.skipped.len()
        );

        Ok(outcome)
    }

    /// Accepts or declines an invitation on behalf of the invited influencer.
    ///
    /// # Arguments
    /// - `user_id` - Influencer user responding
    /// - `invitation_id` - Invitation being answered
    /// - `accept` - `true` to accept, `false` to decline
    ///
    /// # Returns
    /// - `Ok(Invitation)` - The answered invitation
    /// - `Err(AuthError::AccessDenied)` - The invitation belongs to someone else
    /// - `Err(AppError::Conflict)` - Already answered, or the campaign isn't ACTIVE
    pub async fn respond(
        &self,
        user_id: i32,
        invitation_id: i32,
        accept: bool,
    ) -> Result<Invitation, AppError> {
        let (invitation, influencer) = self.own_invitation(user_id, invitation_id).await?;

        if invitation.status != InvitationStatus::Pending {
            return Err(AppError::Conflict(format!(
                "Invitation {} was already answered",
                invitation_id
            )));
        }

        let campaign = self.active_campaign(invitation.campaign_id).await?;

        let status = if accept {
            InvitationStatus::Accepted
        } else {
            InvitationStatus::Declined
        };

        let invitation = InvitationRepository::new(self.db)
            .respond(invitation_id, status)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Invitation {} not found", invitation_id)))?;

        tracing::info!(
            "Influencer {} {} invitation {}",
            influencer.id,
            status.as_str().to_lowercase(),
            invitation_id
        );

        self.notify_owner(
            &campaign,
            NotificationContent::new(
                NotificationKind::InvitationResponded,
                "Invitation answered",
                format!(
                    "{} {} your invitation to {}",
                    influencer.display_name,
                    status.as_str().to_lowercase(),
                    campaign.name
                ),
            ),
        )
        .await?;

        Ok(invitation)
    }

    /// Records the delivered content and its reported results.
    ///
    /// # Returns
    /// - `Ok(Invitation)` - The invitation, now COMPLETED
    /// - `Err(AppError::BadRequest)` - Invalid URL or negative figures
    /// - `Err(AuthError::AccessDenied)` - The invitation belongs to someone else
    /// - `Err(AppError::Conflict)` - Invitation not ACCEPTED, or the campaign isn't ACTIVE
    pub async fn deliver(
        &self,
        user_id: i32,
        invitation_id: i32,
        param: DeliverParam,
    ) -> Result<Invitation, AppError> {
        param.validate()?;

        let (invitation, influencer) = self.own_invitation(user_id, invitation_id).await?;

        if invitation.status != InvitationStatus::Accepted {
            return Err(AppError::Conflict(format!(
                "Invitation {} is {}; only accepted invitations can be delivered",
                invitation_id, invitation.status
            )));
        }

        let campaign = self.active_campaign(invitation.campaign_id).await?;

        let invitation = InvitationRepository::new(self.db)
            .deliver(invitation_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Invitation {} not found", invitation_id)))?;

        tracing::info!(
            "Influencer {} delivered invitation {}",
            influencer.id,
            invitation_id
        );

        self.notify_owner(
            &campaign,
            NotificationContent::new(
                NotificationKind::DeliverableSubmitted,
                "Deliverable submitted",
                format!(
                    "{} delivered content for {}",
                    influencer.display_name, campaign.name
                ),
            ),
        )
        .await?;

        Ok(invitation)
    }

    /// Gets every invitation to a campaign.
    pub async fn get_by_campaign(&self, campaign_id: i32) -> Result<Vec<Invitation>, AppError> {
        self.campaign(campaign_id).await?;

        Ok(InvitationRepository::new(self.db)
            .get_by_campaign(campaign_id)
            .await?)
    }

    /// Gets the user's own invitations, newest first.
    pub async fn get_own_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Invitation>, AppError> {
        let influencer = self.influencer_of(user_id).await?;

        let (invitations, total) = InvitationRepository::new(self.db)
            .get_by_influencer_paginated(influencer.id, page, per_page)
            .await?;

        Ok(Paginated::new(invitations, total, page, per_page))
    }

    async fn influencer_of(&self, user_id: i32) -> Result<Influencer, AppError> {
        InfluencerRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Influencer profile not found".to_string()))
    }

    /// Loads an invitation and checks that it was sent to the user's influencer profile.
    async fn own_invitation(
        &self,
        user_id: i32,
        invitation_id: i32,
    ) -> Result<(Invitation, Influencer), AppError> {
        let influencer = self.influencer_of(user_id).await?;

        let invitation = InvitationRepository::new(self.db)
            .find_by_id(invitation_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Invitation {} not found", invitation_id)))?;

        if invitation.influencer_id != influencer.id {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("Invitation {} was not sent to this user", invitation_id),
            )
            .into());
        }

        Ok((invitation, influencer))
    }

    async fn campaign(&self, campaign_id: i32) -> Result<Campaign, AppError> {
        CampaignRepository::new(self.db)
            .find_by_id(campaign_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Campaign {} not found", campaign_id)))
    }

    async fn active_campaign(&self, campaign_id: i32) -> Result<Campaign, AppError> {
        let campaign = self.campaign(campaign_id).await?;

        if campaign.status != CampaignStatus::Active {
            return Err(AppError::Conflict(format!(
                "Campaign {} is {}, not ACTIVE",
                campaign_id, campaign.status
            )));
        }

        Ok(campaign)
    }

    async fn notify_owner(
        &self,
        campaign: &Campaign,
        content: NotificationContent,
    ) -> Result<(), AppError> {
        if let Some(owner) = CampaignRepository::new(self.db)
            .owner_user_id(campaign.id)
            .await?
        {
            NotificationService::new(self.db, self.app_url)
                .notify(owner, &content.link(campaign_link(campaign.id)))
                .await?;
        }

        Ok(())
    }
}
