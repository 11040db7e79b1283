//! Campaign repository.
//!
//! Campaigns are stored with their requested services in the `campaign_service` join
//! table. Every read attaches the service IDs so callers always see complete campaigns.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::status::CampaignStatus,
    server::model::campaign::{Campaign, CampaignScope, SaveCampaignParam},
};

pub struct CampaignRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CampaignRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a campaign in status PENDING together with its requested services.
    ///
    /// # Arguments
    /// - `brand_id` - Owning brand
    /// - `param` - Validated campaign fields and deduplicated service IDs
    ///
    /// # Returns
    /// - `Ok(Campaign)` - The created campaign
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, brand_id: i32, param: SaveCampaignParam) -> Result<Campaign, DbErr> {
        let now = Utc::now();
        let entity = entity::campaign::ActiveModel {
            brand_id: ActiveValue::Set(brand_id),
            category_id: ActiveValue::Set(param.category_id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            budget: ActiveValue::Set(param.budget),
            start_date: ActiveValue::Set(param.start_date),
            end_date: ActiveValue::Set(param.end_date),
            status: ActiveValue::Set(CampaignStatus::Pending.as_str().to_string()),
            rejection_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.replace_services(entity.id, &param.service_ids).await?;

        Campaign::from_entity(entity, param.service_ids)
    }

    /// Finds a campaign by ID with its service IDs.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Campaign>, DbErr> {
        let Some(entity) = entity::prelude::Campaign::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let service_ids = self.service_ids(&[id]).await?.remove(&id).unwrap_or_default();

        Campaign::from_entity(entity, service_ids).map(Some)
    }

    /// Replaces the editable fields and requested services of a campaign.
    ///
    /// # Returns
    /// - `Ok(Some(Campaign))` - The updated campaign
    /// - `Ok(None)` - No campaign with that ID
    pub async fn update(
        &self,
        id: i32,
        param: SaveCampaignParam,
    ) -> Result<Option<Campaign>, DbErr> {
        let Some(entity) = entity::prelude::Campaign::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.category_id = ActiveValue::Set(param.category_id);
        active.name = ActiveValue::Set(param.name);
        active.description = ActiveValue::Set(param.description);
        active.budget = ActiveValue::Set(param.budget);
        active.start_date = ActiveValue::Set(param.start_date);
        active.end_date = ActiveValue::Set(param.end_date);
        active.updated_at = ActiveValue::Set(Utc::now());
        let updated = active.update(self.db).await?;

        self.replace_services(id, &param.service_ids).await?;

        Campaign::from_entity(updated, param.service_ids).map(Some)
    }

    /// Writes a new status. Transition rules are enforced by the caller.
    ///
    /// # Arguments
    /// - `id` - Campaign ID
    /// - `status` - New status
    /// - `rejection_reason` - Stored reason; only set when rejecting
    pub async fn set_status(
        &self,
        id: i32,
        status: CampaignStatus,
        rejection_reason: Option<String>,
    ) -> Result<Option<Campaign>, DbErr> {
        let Some(entity) = entity::prelude::Campaign::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.rejection_reason = ActiveValue::Set(rejection_reason);
        active.updated_at = ActiveValue::Set(Utc::now());
        let updated = active.update(self.db).await?;

        let service_ids = self.service_ids(&[id]).await?.remove(&id).unwrap_or_default();

        Campaign::from_entity(updated, service_ids).map(Some)
    }

    /// Gets campaigns visible in the scope, newest first.
    ///
    /// # Arguments
    /// - `scope` - All campaigns, a brand's own, or those an influencer is invited to
    /// - `status` - Optional status filter
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of campaigns per page
    ///
    /// # Returns
    /// - `Ok((campaigns, total))` - Campaigns for the page and total matching count
    pub async fn get_paginated(
        &self,
        scope: CampaignScope,
        status: Option<CampaignStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Campaign>, u64), DbErr> {
        let mut query = entity::prelude::Campaign::find();

        match scope {
            CampaignScope::All => {}
            CampaignScope::Brand(brand_id) => {
                query = query.filter(entity::campaign::Column::BrandId.eq(brand_id));
            }
            CampaignScope::Influencer(influencer_id) => {
                let campaign_ids: Vec<i32> = entity::prelude::CampaignInvitation::find()
                    .select_only()
                    .column(entity::campaign_invitation::Column::CampaignId)
                    .filter(entity::campaign_invitation::Column::InfluencerId.eq(influencer_id))
                    .into_tuple()
                    .all(self.db)
                    .await?;

                query = query.filter(entity::campaign::Column::Id.is_in(campaign_ids));
            }
        }

        if let Some(status) = status {
            query = query.filter(entity::campaign::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_desc(entity::campaign::Column::CreatedAt)
            .order_by_desc(entity::campaign::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        let ids: Vec<i32> = entities.iter().map(|c| c.id).collect();
        let mut service_ids = self.service_ids(&ids).await?;

        let campaigns = entities
            .into_iter()
            .map(|c| {
                let services = service_ids.remove(&c.id).unwrap_or_default();
                Campaign::from_entity(c, services)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((campaigns, total))
    }

    /// Gets ACTIVE campaigns whose end date lies before `now`.
    pub async fn find_expired(&self, now: DateTime<Utc>) -> Result<Vec<Campaign>, DbErr> {
        let entities = entity::prelude::Campaign::find()
            .filter(entity::campaign::Column::Status.eq(CampaignStatus::Active.as_str()))
            .filter(entity::campaign::Column::EndDate.lt(now))
            .order_by_asc(entity::campaign::Column::Id)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = entities.iter().map(|c| c.id).collect();
        let mut service_ids = self.service_ids(&ids).await?;

        entities
            .into_iter()
            .map(|c| {
                let services = service_ids.remove(&c.id).unwrap_or_default();
                Campaign::from_entity(c, services)
            })
            .collect()
    }

    /// Gets the user ID of the brand account owning the campaign.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - Owner found
    /// - `Ok(None)` - Campaign or brand missing
    pub async fn owner_user_id(&self, campaign_id: i32) -> Result<Option<i32>, DbErr> {
        let row = entity::prelude::Campaign::find_by_id(campaign_id)
            .find_also_related(entity::prelude::Brand)
            .one(self.db)
            .await?;

        Ok(row.and_then(|(_, brand)| brand).map(|brand| brand.user_id))
    }

    /// Counts campaigns per status; statuses without campaigns are reported as zero.
    pub async fn count_by_status(&self) -> Result<Vec<(CampaignStatus, u64)>, DbErr> {
        let mut counts = Vec::with_capacity(CampaignStatus::ALL.len());
        for status in CampaignStatus::ALL {
            let count = entity::prelude::Campaign::find()
                .filter(entity::campaign::Column::Status.eq(status.as_str()))
                .count(self.db)
                .await?;
            counts.push((status, count));
        }

        Ok(counts)
    }

    async fn service_ids(&self, campaign_ids: &[i32]) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        let mut map: HashMap<i32, Vec<i32>> = HashMap::new();
        if campaign_ids.is_empty() {
            return Ok(map);
        }

        let rows = entity::prelude::CampaignService::find()
            .filter(entity::campaign_service::Column::CampaignId.is_in(campaign_ids.iter().copied()))
            .order_by_asc(entity::campaign_service::Column::ServiceId)
            .all(self.db)
            .await?;

        for row in rows {
            map.entry(row.campaign_id).or_default().push(row.service_id);
        }

        Ok(map)
    }

    async fn replace_services(&self, campaign_id: i32, service_ids: &[i32]) -> Result<(), DbErr> {
        entity::prelude::CampaignService::delete_many()
            .filter(entity::campaign_service::Column::CampaignId.eq(campaign_id))
            .exec(self.db)
            .await?;

        if service_ids.is_empty() {
            return Ok(());
        }

        let rows = service_ids
            .iter()
            .map(|service_id| entity::campaign_service::ActiveModel {
                campaign_id: ActiveValue::Set(campaign_id),
                service_id: ActiveValue::Set(*service_id),
            });
        entity::prelude::CampaignService::insert_many(rows)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }
}
