//! Influencer profile repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::status::ProfileStatus,
    server::model::influencer::{Influencer, SaveInfluencerParam},
};

pub struct InfluencerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InfluencerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an influencer profile for a user with status PENDING.
    pub async fn create(
        &self,
        user_id: i32,
        param: SaveInfluencerParam,
    ) -> Result<Influencer, DbErr> {
        let now = Utc::now();
        let entity = entity::influencer::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            display_name: ActiveValue::Set(param.display_name),
            bio: ActiveValue::Set(param.bio),
            country: ActiveValue::Set(param.country),
            category_id: ActiveValue::Set(param.category_id),
            status: ActiveValue::Set(ProfileStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Influencer::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Influencer>, DbErr> {
        entity::prelude::Influencer::find_by_id(id)
            .one(self.db)
            .await?
            .map(Influencer::from_entity)
            .transpose()
    }

    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Influencer>, DbErr> {
        entity::prelude::Influencer::find()
            .filter(entity::influencer::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
            .map(Influencer::from_entity)
            .transpose()
    }

    /// Gets several influencers at once; missing IDs are left out.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Influencer>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Influencer::find()
            .filter(entity::influencer::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?
            .into_iter()
            .map(Influencer::from_entity)
            .collect()
    }

    pub async fn update(
        &self,
        id: i32,
        param: SaveInfluencerParam,
        status: ProfileStatus,
    ) -> Result<Option<Influencer>, DbErr> {
        let Some(entity) = entity::prelude::Influencer::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.display_name = ActiveValue::Set(param.display_name);
        active.bio = ActiveValue::Set(param.bio);
        active.country = ActiveValue::Set(param.country);
        active.category_id = ActiveValue::Set(param.category_id);
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.updated_at = ActiveValue::Set(Utc::now());

        Influencer::from_entity(active.update(self.db).await?).map(Some)
    }

    pub async fn set_status(
        &self,
        id: i32,
        status: ProfileStatus,
    ) -> Result<Option<Influencer>, DbErr> {
        let Some(entity) = entity::prelude::Influencer::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.updated_at = ActiveValue::Set(Utc::now());

        Influencer::from_entity(active.update(self.db).await?).map(Some)
    }

    /// Gets influencers ordered by display name.
    ///
    /// # Arguments
    /// - `status` - Only include profiles in this status
    /// - `category_id` - Only include profiles in this category
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of influencers per page
    ///
    /// # Returns
    /// - `Ok((influencers, total))` - Influencers for the page and total matching count
    pub async fn get_paginated(
        &self,
        status: Option<ProfileStatus>,
        category_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Influencer>, u64), DbErr> {
        let mut query = entity::prelude::Influencer::find();
        if let Some(status) = status {
            query = query.filter(entity::influencer::Column::Status.eq(status.as_str()));
        }
        if let Some(category_id) = category_id {
            query = query.filter(entity::influencer::Column::CategoryId.eq(category_id));
        }

        let paginator = query
            .order_by_asc(entity::influencer::Column::DisplayName)
            .order_by_asc(entity::influencer::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let influencers = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Influencer::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((influencers, total))
    }

    pub async fn count_by_status(&self, status: ProfileStatus) -> Result<u64, DbErr> {
        entity::prelude::Influencer::find()
            .filter(entity::influencer::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }
}
