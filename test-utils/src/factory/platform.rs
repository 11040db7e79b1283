//! Platform factory for creating test social platforms.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating platforms.
///
/// The default slug is unique per call; use `slug("instagram")` when the test
/// exercises an OAuth connector.
pub struct PlatformFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    slug: String,
    active: bool,
}

impl<'a> PlatformFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Platform {}", id),
            slug: format!("platform-{}", id),
            active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub async fn build(self) -> Result<entity::platform::Model, DbErr> {
        entity::platform::ActiveModel {
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            active: ActiveValue::Set(self.active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active platform with a unique slug.
pub async fn create_platform(db: &DatabaseConnection) -> Result<entity::platform::Model, DbErr> {
    PlatformFactory::new(db).build().await
}

/// Creates an active platform with the given slug, named after it.
pub async fn create_platform_with_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<entity::platform::Model, DbErr> {
    PlatformFactory::new(db).name(slug).slug(slug).build().await
}
