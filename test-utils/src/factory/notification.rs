//! Notification factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an unread notification for the given user.
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::notification::Model, DbErr> {
    let id = next_id();
    entity::notification::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        kind: ActiveValue::Set("campaign_created".to_string()),
        title: ActiveValue::Set(format!("Notification {}", id)),
        message: ActiveValue::Set("Something happened".to_string()),
        link: ActiveValue::Set(None),
        read: ActiveValue::Set(false),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
