//! Campaign invitation repository.
//!
//! Besides CRUD this repository answers the participation queries used by the MOU
//! workflow, the completion fan-out and the metrics aggregation.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::status::InvitationStatus,
    server::model::{
        invitation::{DeliverParam, Invitation},
        metrics::InvitationSample,
    },
};

pub struct InvitationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvitationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a PENDING invitation.
    pub async fn create(
        &self,
        campaign_id: i32,
        influencer_id: i32,
        message: Option<String>,
    ) -> Result<Invitation, DbErr> {
        let entity = entity::campaign_invitation::ActiveModel {
            campaign_id: ActiveValue::Set(campaign_id),
            influencer_id: ActiveValue::Set(influencer_id),
            status: ActiveValue::Set(InvitationStatus::Pending.as_str().to_string()),
            message: ActiveValue::Set(message),
            invited_at: ActiveValue::Set(Utc::now()),
            responded_at: ActiveValue::Set(None),
            delivered_at: ActiveValue::Set(None),
            content_url: ActiveValue::Set(None),
            reach: ActiveValue::Set(0),
            impressions: ActiveValue::Set(0),
            engagements: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Invitation::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Invitation>, DbErr> {
        entity::prelude::CampaignInvitation::find_by_id(id)
            .one(self.db)
            .await?
            .map(Invitation::from_entity)
            .transpose()
    }

    /// Finds the invitation of an influencer to a campaign.
    pub async fn find_by_campaign_and_influencer(
        &self,
        campaign_id: i32,
        influencer_id: i32,
    ) -> Result<Option<Invitation>, DbErr> {
        entity::prelude::CampaignInvitation::find()
            .filter(entity::campaign_invitation::Column::CampaignId.eq(campaign_id))
            .filter(entity::campaign_invitation::Column::InfluencerId.eq(influencer_id))
            .one(self.db)
            .await?
            .map(Invitation::from_entity)
            .transpose()
    }

    /// Gets every invitation of a campaign in invitation order.
    pub async fn get_by_campaign(&self, campaign_id: i32) -> Result<Vec<Invitation>, DbErr> {
        entity::prelude::CampaignInvitation::find()
            .filter(entity::campaign_invitation::Column::CampaignId.eq(campaign_id))
            .order_by_asc(entity::campaign_invitation::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Invitation::from_entity)
            .collect()
    }

    /// Gets an influencer's invitations, newest first.
    ///
    /// # Returns
    /// - `Ok((invitations, total))` - Invitations for the page and total count
    pub async fn get_by_influencer_paginated(
        &self,
        influencer_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Invitation>, u64), DbErr> {
        let paginator = entity::prelude::CampaignInvitation::find()
            .filter(entity::campaign_invitation::Column::InfluencerId.eq(influencer_id))
            .order_by_desc(entity::campaign_invitation::Column::InvitedAt)
            .order_by_desc(entity::campaign_invitation::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let invitations = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Invitation::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((invitations, total))
    }

    /// Records an accept or decline and stamps `responded_at`.
    pub async fn respond(
        &self,
        id: i32,
        status: InvitationStatus,
    ) -> Result<Option<Invitation>, DbErr> {
        let Some(entity) = entity::prelude::CampaignInvitation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.responded_at = ActiveValue::Set(Some(Utc::now()));

        Invitation::from_entity(active.update(self.db).await?).map(Some)
    }

    /// Stores delivered content and its results, completing the invitation.
    pub async fn deliver(&self, id: i32, param: DeliverParam) -> Result<Option<Invitation>, DbErr> {
        let Some(entity) = entity::prelude::CampaignInvitation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(InvitationStatus::Completed.as_str().to_string());
        active.delivered_at = ActiveValue::Set(Some(Utc::now()));
        active.content_url = ActiveValue::Set(Some(param.content_url));
        active.reach = ActiveValue::Set(param.reach);
        active.impressions = ActiveValue::Set(param.impressions);
        active.engagements = ActiveValue::Set(param.engagements);

        Invitation::from_entity(active.update(self.db).await?).map(Some)
    }

    /// Gets the user IDs of influencers with an ACCEPTED or COMPLETED invitation.
    ///
    /// These are the campaign participants: they receive the completion notification
    /// and must approve the MOU.
    pub async fn participant_user_ids(&self, campaign_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::CampaignInvitation::find()
            .filter(entity::campaign_invitation::Column::CampaignId.eq(campaign_id))
            .filter(entity::campaign_invitation::Column::Status.is_in([
                InvitationStatus::Accepted.as_str(),
                InvitationStatus::Completed.as_str(),
            ]))
            .find_also_related(entity::prelude::Influencer)
            .order_by_asc(entity::campaign_invitation::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, influencer)| influencer.map(|i| i.user_id))
            .collect())
    }

    /// Gets status and reported figures of every invitation of a campaign.
    pub async fn campaign_figures(
        &self,
        campaign_id: i32,
    ) -> Result<Vec<(InvitationStatus, i64, i64, i64)>, DbErr> {
        self.get_by_campaign(campaign_id).await.map(|invitations| {
            invitations
                .into_iter()
                .map(|i| (i.status, i.reach, i.impressions, i.engagements))
                .collect()
        })
    }

    /// Gets an influencer's invitations paired with the campaign end date.
    pub async fn samples_for_influencer(
        &self,
        influencer_id: i32,
    ) -> Result<Vec<InvitationSample>, DbErr> {
        let rows = entity::prelude::CampaignInvitation::find()
            .filter(entity::campaign_invitation::Column::InfluencerId.eq(influencer_id))
            .find_also_related(entity::prelude::Campaign)
            .all(self.db)
            .await?;

        rows.into_iter()
            .filter_map(|(invitation, campaign)| campaign.map(|c| (invitation, c)))
            .map(|(invitation, campaign)| {
                Ok(InvitationSample {
                    status: invitation.status.parse()?,
                    reach: invitation.reach,
                    engagements: invitation.engagements,
                    delivered_at: invitation.delivered_at,
                    campaign_end_date: campaign.end_date,
                })
            })
            .collect()
    }
}
