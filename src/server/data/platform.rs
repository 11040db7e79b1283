//! Platform repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::platform::{CreatePlatformParam, Platform, UpdatePlatformParam};

pub struct PlatformRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlatformRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreatePlatformParam) -> Result<Platform, DbErr> {
        let entity = entity::platform::ActiveModel {
            name: ActiveValue::Set(param.name),
            slug: ActiveValue::Set(param.slug),
            active: ActiveValue::Set(param.active),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Platform::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Platform>, DbErr> {
        Ok(entity::prelude::Platform::find_by_id(id)
            .one(self.db)
            .await?
            .map(Platform::from_entity))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Platform>, DbErr> {
        Ok(entity::prelude::Platform::find()
            .filter(entity::platform::Column::Slug.eq(slug))
            .one(self.db)
            .await?
            .map(Platform::from_entity))
    }

    /// Gets platforms ordered by name.
    ///
    /// # Arguments
    /// - `include_inactive` - Whether disabled platforms are included
    pub async fn get_all(&self, include_inactive: bool) -> Result<Vec<Platform>, DbErr> {
        let mut query = entity::prelude::Platform::find();
        if !include_inactive {
            query = query.filter(entity::platform::Column::Active.eq(true));
        }

        Ok(query
            .order_by_asc(entity::platform::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Platform::from_entity)
            .collect())
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpdatePlatformParam,
    ) -> Result<Option<Platform>, DbErr> {
        let Some(entity) = entity::prelude::Platform::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(param.name);
        active.active = ActiveValue::Set(param.active);

        Ok(Some(Platform::from_entity(active.update(self.db).await?)))
    }

    /// Deletes a platform along with its services and connected accounts.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Platform::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
