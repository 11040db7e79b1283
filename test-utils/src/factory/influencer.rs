//! Influencer factory for creating test influencer profiles.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating influencer profiles owned by an existing user.
///
/// Influencers default to `"APPROVED"` so they can be invited right away.
pub struct InfluencerFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    display_name: String,
    category_id: Option<i32>,
    status: String,
}

impl<'a> InfluencerFactory<'a> {
    /// Creates a new InfluencerFactory for the given owning user.
    ///
    /// Defaults:
    /// - display_name: `"Creator {id}"`
    /// - category_id: None
    /// - status: `"APPROVED"`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            display_name: format!("Creator {}", next_id()),
            category_id: None,
            status: "APPROVED".to_string(),
        }
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn category_id(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Sets the onboarding status, one of `"PENDING"`, `"APPROVED"` or `"REJECTED"`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::influencer::Model, DbErr> {
        let now = Utc::now();
        entity::influencer::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            display_name: ActiveValue::Set(self.display_name),
            bio: ActiveValue::Set(None),
            country: ActiveValue::Set(None),
            category_id: ActiveValue::Set(self.category_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an approved influencer for the given user.
pub async fn create_influencer(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::influencer::Model, DbErr> {
    InfluencerFactory::new(db, user_id).build().await
}
