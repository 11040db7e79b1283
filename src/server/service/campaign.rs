//! Campaign lifecycle.
//!
//! Campaigns move through the status workflow defined by
//! [`CampaignStatus::can_transition_to`]. Every status change goes through
//! [`CampaignService::transition`] so illegal moves are rejected with a conflict in one
//! place. An ACTIVE campaign whose end date has passed is completed lazily when read,
//! by the scheduler sweep and by the admin expiry endpoint.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::status::{CampaignStatus, ProfileStatus, UserRole},
    server::{
        data::{
            brand::BrandRepository, campaign::CampaignRepository, category::CategoryRepository,
            influencer::InfluencerRepository, invitation::InvitationRepository,
            service_item::ServiceItemRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            campaign::{Campaign, CampaignScope, SaveCampaignParam},
            notification::{NotificationContent, NotificationKind},
            pagination::Paginated,
            user::User,
        },
        service::notification::NotificationService,
    },
};

pub struct CampaignService<'a> {
    db: &'a DatabaseConnection,
    app_url: &'a str,
}

impl<'a> CampaignService<'a> {
    pub fn new(db: &'a DatabaseConnection, app_url: &'a str) -> Self {
        Self { db, app_url }
    }

    /// Creates a PENDING campaign for the user's brand and notifies admins.
    ///
    /// # Arguments
    /// - `user_id` - Brand user creating the campaign
    /// - `param` - Campaign fields
    ///
    /// # Returns
    /// - `Ok(Campaign)` - The new campaign
    /// - `Err(AppError::NotFound)` - The user has no brand profile
    /// - `Err(AuthError::AccessDenied)` - The brand isn't approved yet
    /// - `Err(AppError::BadRequest)` - Invalid fields or unknown category/services
    pub async fn create(&self, user_id: i32, param: SaveCampaignParam) -> Result<Campaign, AppError> {
        let brand = BrandRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Brand profile not found".to_string()))?;

        if brand.status != ProfileStatus::Approved {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("Brand {} is {} and cannot create campaigns", brand.id, brand.status),
            )
            .into());
        }

        self.validate(&param).await?;

        let campaign = CampaignRepository::new(self.db).create(brand.id, param).await?;

        tracing::info!("Campaign {} created by brand {}", campaign.id, brand.id);

        NotificationService::new(self.db, self.app_url)
            .notify_admins(
                &NotificationContent::new(
                    NotificationKind::CampaignCreated,
                    "New campaign awaiting approval",
                    format!("{} submitted the campaign {}", brand.name, campaign.name),
                )
                .link(campaign_link(campaign.id)),
            )
            .await?;

        Ok(campaign)
    }

    /// Gets a campaign, completing it first if it has expired.
    pub async fn get(&self, id: i32) -> Result<Campaign, AppError> {
        let campaign = self.find(id).await?;

        if campaign.is_expired(Utc::now()) {
            return self.finish(campaign).await;
        }

        Ok(campaign)
    }

    /// Lists the campaigns the user can see, newest first.
    ///
    /// Admins see every campaign, brand users their brand's campaigns and
    /// influencers the campaigns they were invited to. Users without a profile
    /// get an empty page.
    pub async fn get_paginated(
        &self,
        user: &User,
        status: Option<CampaignStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Campaign>, AppError> {
        let scope = match user.role {
            UserRole::Admin => Some(CampaignScope::All),
            UserRole::Brand => BrandRepository::new(self.db)
                .find_by_user_id(user.id)
                .await?
                .map(|brand| CampaignScope::Brand(brand.id)),
            UserRole::Influencer => InfluencerRepository::new(self.db)
                .find_by_user_id(user.id)
                .await?
                .map(|influencer| CampaignScope::Influencer(influencer.id)),
        };

        let Some(scope) = scope else {
            return Ok(Paginated::new(Vec::new(), 0, page, per_page));
        };

        let (campaigns, total) = CampaignRepository::new(self.db)
            .get_paginated(scope, status, page, per_page)
            .await?;

        Ok(Paginated::new(campaigns, total, page, per_page))
    }

    /// Replaces a campaign's fields while it is still PENDING.
    ///
    /// # Returns
    /// - `Ok(Campaign)` - The updated campaign
    /// - `Err(AppError::Conflict)` - The campaign has left PENDING
    /// - `Err(AppError::BadRequest)` - Invalid fields
    pub async fn update(&self, id: i32, param: SaveCampaignParam) -> Result<Campaign, AppError> {
        let campaign = self.find(id).await?;
        if campaign.status != CampaignStatus::Pending {
            return Err(AppError::Conflict(format!(
                "Campaign {} is {} and can no longer be edited",
                id, campaign.status
            )));
        }

        self.validate(&param).await?;

        CampaignRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Campaign {} not found", id)))
    }

    /// Approves a PENDING campaign, making it ACTIVE.
    pub async fn approve(&self, id: i32) -> Result<Campaign, AppError> {
        let campaign = self.transition(id, CampaignStatus::Active, None).await?;

        self.notify_owner(
            &campaign,
            NotificationContent::new(
                NotificationKind::CampaignApproved,
                "Campaign approved",
                format!("Your campaign {} is now active", campaign.name),
            ),
        )
        .await?;

        Ok(campaign)
    }

    /// Rejects a PENDING campaign.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Empty reason
    /// - `Err(AppError::Conflict)` - The campaign isn't PENDING
    pub async fn reject(&self, id: i32, reason: &str) -> Result<Campaign, AppError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(AppError::BadRequest(
                "A rejection reason is required".to_string(),
            ));
        }

        let campaign = self
            .transition(id, CampaignStatus::Rejected, Some(reason.to_string()))
            .await?;

        self.notify_owner(
            &campaign,
            NotificationContent::new(
                NotificationKind::CampaignRejected,
                "Campaign rejected",
                format!("Your campaign {} was rejected: {}", campaign.name, reason),
            ),
        )
        .await?;

        Ok(campaign)
    }

    /// Cancels a PENDING or ACTIVE campaign and tells everyone taking part.
    pub async fn cancel(&self, id: i32) -> Result<Campaign, AppError> {
        let campaign = self.transition(id, CampaignStatus::Cancelled, None).await?;

        let recipients = self.participants(&campaign).await?;
        NotificationService::new(self.db, self.app_url)
            .fan_out(
                &recipients,
                &NotificationContent::new(
                    NotificationKind::CampaignCancelled,
                    "Campaign cancelled",
                    format!("The campaign {} was cancelled", campaign.name),
                )
                .link(campaign_link(campaign.id)),
            )
            .await;

        Ok(campaign)
    }

    /// Completes an ACTIVE campaign ahead of its end date.
    pub async fn complete(&self, id: i32) -> Result<Campaign, AppError> {
        let campaign = self.find(id).await?;

        self.finish(campaign).await
    }

    /// Completes every ACTIVE campaign whose end date is before `now`.
    ///
    /// A campaign that fails to complete is logged and left for the next sweep.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of campaigns completed
    pub async fn expire_due(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        let expired = CampaignRepository::new(self.db).find_expired(now).await?;

        let mut completed = 0;
        for campaign in expired {
            let id = campaign.id;
            match self.finish(campaign).await {
                Ok(_) => completed += 1,
                Err(e) => tracing::warn!("Failed to complete expired campaign {}: {}", id, e),
            }
        }

        if completed > 0 {
            tracing::info!("Completed {} expired campaigns", completed);
        }

        Ok(completed)
    }

    /// Moves a campaign to COMPLETED and notifies the owner and every participating
    /// influencer.
    async fn finish(&self, campaign: Campaign) -> Result<Campaign, AppError> {
        let campaign = self
            .transition(campaign.id, CampaignStatus::Completed, None)
            .await?;

        let recipients = self.participants(&campaign).await?;
        NotificationService::new(self.db, self.app_url)
            .fan_out(
                &recipients,
                &NotificationContent::new(
                    NotificationKind::CampaignCompleted,
                    "Campaign completed",
                    format!("The campaign {} has been completed", campaign.name),
                )
                .link(campaign_link(campaign.id)),
            )
            .await;

        Ok(campaign)
    }

    /// Applies a status change if the workflow allows it.
    ///
    /// # Returns
    /// - `Ok(Campaign)` - The campaign in its new status
    /// - `Err(AppError::NotFound)` - No such campaign
    /// - `Err(AppError::Conflict)` - The transition isn't allowed from the current status
    async fn transition(
        &self,
        id: i32,
        next: CampaignStatus,
        rejection_reason: Option<String>,
    ) -> Result<Campaign, AppError> {
        let campaign = self.find(id).await?;

        if !campaign.status.can_transition_to(next) {
            return Err(AppError::Conflict(format!(
                "Campaign {} cannot move from {} to {}",
                id, campaign.status, next
            )));
        }

        let updated = CampaignRepository::new(self.db)
            .set_status(id, next, rejection_reason)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Campaign {} not found", id)))?;

        tracing::info!("Campaign {}: {} -> {}", id, campaign.status, next);

        Ok(updated)
    }

    async fn find(&self, id: i32) -> Result<Campaign, AppError> {
        CampaignRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Campaign {} not found", id)))
    }

    /// The brand owner followed by the users of every accepted or completed invitee.
    async fn participants(&self, campaign: &Campaign) -> Result<Vec<i32>, AppError> {
        let mut recipients = Vec::new();
        if let Some(owner) = CampaignRepository::new(self.db)
            .owner_user_id(campaign.id)
            .await?
        {
            recipients.push(owner);
        }

        for user_id in InvitationRepository::new(self.db)
            .participant_user_ids(campaign.id)
            .await?
        {
            if !recipients.contains(&user_id) {
                recipients.push(user_id);
            }
        }

        Ok(recipients)
    }

    async fn notify_owner(
        &self,
        campaign: &Campaign,
        content: NotificationContent,
    ) -> Result<(), AppError> {
        let Some(owner) = CampaignRepository::new(self.db)
            .owner_user_id(campaign.id)
            .await?
        else {
            return Ok(());
        };

        NotificationService::new(self.db, self.app_url)
            .notify(owner, &content.link(campaign_link(campaign.id)))
            .await?;

        Ok(())
    }

    /// Checks the fields and that the referenced category and services exist.
    async fn validate(&self, param: &SaveCampaignParam) -> Result<(), AppError> {
        param.validate()?;

        if let Some(category_id) = param.category_id {
            if CategoryRepository::new(self.db)
                .find_by_id(category_id)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(format!(
                    "Category {} does not exist",
                    category_id
                )));
            }
        }

        let existing = ServiceItemRepository::new(self.db)
            .count_existing(&param.service_ids)
            .await?;
        if existing != param.service_ids.len() as u64 {
            return Err(AppError::BadRequest(
                "One or more requested services do not exist".to_string(),
            ));
        }

        Ok(())
    }
}

pub(crate) fn campaign_link(campaign_id: i32) -> String {
    format!("/campaigns/{}", campaign_id)
}
