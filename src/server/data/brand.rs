//! Brand profile repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::status::ProfileStatus,
    server::model::brand::{Brand, SaveBrandParam},
};

pub struct BrandRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BrandRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a brand profile for a user with status PENDING.
    pub async fn create(&self, user_id: i32, param: SaveBrandParam) -> Result<Brand, DbErr> {
        let now = Utc::now();
        let entity = entity::brand::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            website: ActiveValue::Set(param.website),
            industry: ActiveValue::Set(param.industry),
            status: ActiveValue::Set(ProfileStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Brand::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Brand>, DbErr> {
        entity::prelude::Brand::find_by_id(id)
            .one(self.db)
            .await?
            .map(Brand::from_entity)
            .transpose()
    }

    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Brand>, DbErr> {
        entity::prelude::Brand::find()
            .filter(entity::brand::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
            .map(Brand::from_entity)
            .transpose()
    }

    /// Replaces the editable profile fields and sets the status.
    ///
    /// # Returns
    /// - `Ok(Some(Brand))` - The updated brand
    /// - `Ok(None)` - No brand with that ID
    pub async fn update(
        &self,
        id: i32,
        param: SaveBrandParam,
        status: ProfileStatus,
    ) -> Result<Option<Brand>, DbErr> {
        let Some(entity) = entity::prelude::Brand::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(param.name);
        active.description = ActiveValue::Set(param.description);
        active.website = ActiveValue::Set(param.website);
        active.industry = ActiveValue::Set(param.industry);
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.updated_at = ActiveValue::Set(Utc::now());

        Brand::from_entity(active.update(self.db).await?).map(Some)
    }

    pub async fn set_status(
        &self,
        id: i32,
        status: ProfileStatus,
    ) -> Result<Option<Brand>, DbErr> {
        let Some(entity) = entity::prelude::Brand::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.updated_at = ActiveValue::Set(Utc::now());

        Brand::from_entity(active.update(self.db).await?).map(Some)
    }

    /// Gets brands ordered by name, optionally filtered by status.
    ///
    /// # Returns
    /// - `Ok((brands, total))` - Brands for the requested page and total matching count
    pub async fn get_paginated(
        &self,
        status: Option<ProfileStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Brand>, u64), DbErr> {
        let mut query = entity::prelude::Brand::find();
        if let Some(status) = status {
            query = query.filter(entity::brand::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_asc(entity::brand::Column::Name)
            .order_by_asc(entity::brand::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let brands = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Brand::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((brands, total))
    }

    pub async fn count_by_status(&self, status: ProfileStatus) -> Result<u64, DbErr> {
        entity::prelude::Brand::find()
            .filter(entity::brand::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }
}
