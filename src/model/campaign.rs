use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::status::CampaignStatus;

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct CampaignDto {
    pub id: i32,
    pub brand_id: i32,
    pub category_id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub budget: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: CampaignStatus,
    pub rejection_reason: Option<String>,
    pub service_ids: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Used for both creating and updating a campaign.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SaveCampaignDto {
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<i32>,
    pub budget: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub service_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RejectCampaignDto {
    pub reason: String,
}

#[derive(Deserialize, IntoParams)]
pub struct CampaignFilterParam {
    pub status: Option<CampaignStatus>,
}

/// Result of an expiry sweep.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ExpiredCampaignsDto {
    pub expired: u64,
}
