use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::status::ProfileStatus;

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct BrandDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub status: ProfileStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Brand profile fields submitted during onboarding and on later edits.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct BrandProfileDto {
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub industry: Option<String>,
}

/// Admin review outcome for a brand or influencer profile.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ReviewProfileDto {
    pub reason: Option<String>,
}

/// Filters for the admin profile listings.
#[derive(Deserialize, IntoParams)]
pub struct ProfileFilterParam {
    /// Only return profiles in this onboarding status.
    pub status: Option<ProfileStatus>,
}
