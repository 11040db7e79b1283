use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::status::ProfileStatus;

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct InfluencerDto {
    pub id: i32,
    pub user_id: i32,
    pub display_name: String,
    pub bio: Option<String>,
    pub country: Option<String>,
    pub category_id: Option<i32>,
    pub status: ProfileStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct InfluencerProfileDto {
    pub display_name: String,
    pub bio: Option<String>,
    pub country: Option<String>,
    pub category_id: Option<i32>,
}

#[derive(Deserialize, IntoParams)]
pub struct BrowseInfluencersParam {
    /// Only return influencers in this category.
    pub category_id: Option<i32>,
}
