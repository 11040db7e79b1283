//! Service factory for creating deliverable types offered on a platform.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a service named `"Service {id}"` on the given platform.
pub async fn create_service(
    db: &DatabaseConnection,
    platform_id: i32,
) -> Result<entity::service::Model, DbErr> {
    entity::service::ActiveModel {
        platform_id: ActiveValue::Set(platform_id),
        name: ActiveValue::Set(format!("Service {}", next_id())),
        description: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
