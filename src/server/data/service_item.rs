//! Service repository.
//!
//! A service is a deliverable offered on a platform. The table is named `service`;
//! the domain type is `ServiceItem` to keep it apart from the application services.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::service_item::{SaveServiceItemParam, ServiceItem};

pub struct ServiceItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        platform_id: i32,
        param: SaveServiceItemParam,
    ) -> Result<ServiceItem, DbErr> {
        let entity = entity::service::ActiveModel {
            platform_id: ActiveValue::Set(platform_id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ServiceItem::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ServiceItem>, DbErr> {
        Ok(entity::prelude::Service::find_by_id(id)
            .one(self.db)
            .await?
            .map(ServiceItem::from_entity))
    }

    /// Gets the services offered on a platform ordered by name.
    pub async fn get_by_platform(&self, platform_id: i32) -> Result<Vec<ServiceItem>, DbErr> {
        Ok(entity::prelude::Service::find()
            .filter(entity::service::Column::PlatformId.eq(platform_id))
            .order_by_asc(entity::service::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(ServiceItem::from_entity)
            .collect())
    }

    /// Counts how many of the given IDs refer to existing services.
    ///
    /// IDs must be deduplicated by the caller for the count to be meaningful.
    pub async fn count_existing(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::Service::find()
            .filter(entity::service::Column::Id.is_in(ids.iter().copied()))
            .count(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        param: SaveServiceItemParam,
    ) -> Result<Option<ServiceItem>, DbErr> {
        let Some(entity) = entity::prelude::Service::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(param.name);
        active.description = ActiveValue::Set(param.description);

        Ok(Some(ServiceItem::from_entity(active.update(self.db).await?)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Service::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
