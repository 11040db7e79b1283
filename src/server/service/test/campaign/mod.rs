use super::APP_URL;
use crate::{
    model::status::CampaignStatus,
    server::{
        data::{campaign::CampaignRepository, notification::NotificationRepository},
        error::{auth::AuthError, AppError},
        model::{campaign::SaveCampaignParam, user::User},
        service::campaign::CampaignService,
    },
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list;
mod transition;

fn param(service_ids: Vec<i32>) -> SaveCampaignParam {
    let now = Utc::now();
    SaveCampaignParam {
        name: "Summer launch".to_string(),
        description: Some("Reels for the new collection".to_string()),
        category_id: None,
        budget: 2500,
        start_date: now,
        end_date: now + Duration::days(30),
        service_ids,
    }
}

fn user(entity: entity::user::Model) -> User {
    User::from_entity(entity).unwrap()
}

async fn unread(db: &sea_orm::DatabaseConnection, user_id: i32) -> u64 {
    NotificationRepository::new(db)
        .count_unread(user_id)
        .await
        .unwrap()
}
