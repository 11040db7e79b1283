//! Brand factory for creating test brand profiles.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating brand profiles owned by an existing user.
///
/// Brands default to `"APPROVED"` since most tests exercise post-onboarding behavior.
pub struct BrandFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    industry: Option<String>,
    status: String,
}

impl<'a> BrandFactory<'a> {
    /// Creates a new BrandFactory for the given owning user.
    ///
    /// Defaults:
    /// - name: `"Brand {id}"`
    /// - industry: None
    /// - status: `"APPROVED"`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            name: format!("Brand {}", next_id()),
            industry: None,
            status: "APPROVED".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    /// Sets the onboarding status, one of `"PENDING"`, `"APPROVED"` or `"REJECTED"`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::brand::Model, DbErr> {
        let now = Utc::now();
        entity::brand::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            website: ActiveValue::Set(None),
            industry: ActiveValue::Set(self.industry),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an approved brand for the given user.
pub async fn create_brand(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::brand::Model, DbErr> {
    BrandFactory::new(db, user_id).build().await
}
