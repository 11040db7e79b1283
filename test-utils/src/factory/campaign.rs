//! Campaign factory for creating test campaigns.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating campaigns owned by an existing brand.
///
/// # Example
///
/// ```rust,ignore
/// let expired = CampaignFactory::new(&db, brand.id)
///     .status("ACTIVE")
///     .end_date(Utc::now() - Duration::hours(1))
///     .build()
///     .await?;
/// ```
pub struct CampaignFactory<'a> {
    db: &'a DatabaseConnection,
    brand_id: i32,
    category_id: Option<i32>,
    name: String,
    budget: i64,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    status: String,
}

impl<'a> CampaignFactory<'a> {
    /// Creates a new CampaignFactory for the given brand.
    ///
    /// Defaults:
    /// - name: `"Campaign {id}"`
    /// - budget: 100000
    /// - start_date: one day ago
    /// - end_date: seven days from now
    /// - status: `"PENDING"`
    pub fn new(db: &'a DatabaseConnection, brand_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            brand_id,
            category_id: None,
            name: format!("Campaign {}", next_id()),
            budget: 100_000,
            start_date: now - Duration::days(1),
            end_date: now + Duration::days(7),
            status: "PENDING".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn category_id(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn budget(mut self, budget: i64) -> Self {
        self.budget = budget;
        self
    }

    pub fn start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = end_date;
        self
    }

    /// Sets the status, e.g. `"ACTIVE"` or `"COMPLETED"`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::campaign::Model, DbErr> {
        let now = Utc::now();
        entity::campaign::ActiveModel {
            brand_id: ActiveValue::Set(self.brand_id),
            category_id: ActiveValue::Set(self.category_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            budget: ActiveValue::Set(self.budget),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            status: ActiveValue::Set(self.status),
            rejection_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending campaign for the given brand.
pub async fn create_campaign(
    db: &DatabaseConnection,
    brand_id: i32,
) -> Result<entity::campaign::Model, DbErr> {
    CampaignFactory::new(db, brand_id).build().await
}
