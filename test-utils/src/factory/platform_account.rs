//! Platform account factory for creating connected social accounts.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating an influencer's connected platform account.
pub struct PlatformAccountFactory<'a> {
    db: &'a DatabaseConnection,
    influencer_id: i32,
    platform_id: i32,
    username: String,
    followers_count: i64,
}

impl<'a> PlatformAccountFactory<'a> {
    /// Defaults to a unique username and 1000 followers.
    pub fn new(db: &'a DatabaseConnection, influencer_id: i32, platform_id: i32) -> Self {
        Self {
            db,
            influencer_id,
            platform_id,
            username: format!("creator_{}", next_id()),
            followers_count: 1000,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn followers(mut self, followers_count: i64) -> Self {
        self.followers_count = followers_count;
        self
    }

    pub async fn build(self) -> Result<entity::platform_account::Model, DbErr> {
        let now = Utc::now();
        entity::platform_account::ActiveModel {
            influencer_id: ActiveValue::Set(self.influencer_id),
            platform_id: ActiveValue::Set(self.platform_id),
            external_id: ActiveValue::Set(format!("ext-{}", next_id())),
            username: ActiveValue::Set(self.username),
            access_token: ActiveValue::Set("test-access-token".to_string()),
            refresh_token: ActiveValue::Set(None),
            token_expires_at: ActiveValue::Set(None),
            followers_count: ActiveValue::Set(self.followers_count),
            connected_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a connected account with default values.
pub async fn create_platform_account(
    db: &DatabaseConnection,
    influencer_id: i32,
    platform_id: i32,
) -> Result<entity::platform_account::Model, DbErr> {
    PlatformAccountFactory::new(db, influencer_id, platform_id)
        .build()
        .await
}
