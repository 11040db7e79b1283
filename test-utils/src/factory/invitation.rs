//! Campaign invitation factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating campaign invitations.
///
/// Setting a status other than `"PENDING"` also stamps `responded_at`; `delivered()`
/// stamps `delivered_at` and the reported reach figures.
pub struct InvitationFactory<'a> {
    db: &'a DatabaseConnection,
    campaign_id: i32,
    influencer_id: i32,
    status: String,
    delivered_at: Option<DateTime<Utc>>,
    reach: i64,
    impressions: i64,
    engagements: i64,
}

impl<'a> InvitationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, campaign_id: i32, influencer_id: i32) -> Self {
        Self {
            db,
            campaign_id,
            influencer_id,
            status: "PENDING".to_string(),
            delivered_at: None,
            reach: 0,
            impressions: 0,
            engagements: 0,
        }
    }

    /// Sets the status, one of `"PENDING"`, `"ACCEPTED"`, `"DECLINED"` or `"COMPLETED"`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Marks the deliverable as submitted at `delivered_at` with the given figures.
    pub fn delivered(
        mut self,
        delivered_at: DateTime<Utc>,
        reach: i64,
        impressions: i64,
        engagements: i64,
    ) -> Self {
        self.status = "COMPLETED".to_string();
        self.delivered_at = Some(delivered_at);
        self.reach = reach;
        self.impressions = impressions;
        self.engagements = engagements;
        self
    }

    pub async fn build(self) -> Result<entity::campaign_invitation::Model, DbErr> {
        let now = Utc::now();
        let responded_at = if self.status == "PENDING" {
            None
        } else {
            Some(now)
        };

        entity::campaign_invitation::ActiveModel {
            campaign_id: ActiveValue::Set(self.campaign_id),
            influencer_id: ActiveValue::Set(self.influencer_id),
            status: ActiveValue::Set(self.status),
            message: ActiveValue::Set(None),
            invited_at: ActiveValue::Set(now),
            responded_at: ActiveValue::Set(responded_at),
            delivered_at: ActiveValue::Set(self.delivered_at),
            content_url: ActiveValue::Set(None),
            reach: ActiveValue::Set(self.reach),
            impressions: ActiveValue::Set(self.impressions),
            engagements: ActiveValue::Set(self.engagements),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending invitation.
pub async fn create_invitation(
    db: &DatabaseConnection,
    campaign_id: i32,
    influencer_id: i32,
) -> Result<entity::campaign_invitation::Model, DbErr> {
    InvitationFactory::new(db, campaign_id, influencer_id)
        .build()
        .await
}
