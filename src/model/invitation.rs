use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::status::InvitationStatus;

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct InvitationDto {
    pub id: i32,
    pub campaign_id: i32,
    pub influencer_id: i32,
    pub status: InvitationStatus,
    pub message: Option<String>,
    pub invited_at: DateTime<Utc>,
    pub responded_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub content_url: Option<String>,
    pub reach: i64,
    pub impressions: i64,
    pub engagements: i64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct InviteInfluencersDto {
    pub influencer_ids: Vec<i32>,
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct InviteResultDto {
    pub invited: Vec<InvitationDto>,
    /// Influencers that already held an invitation to the campaign.
    pub skipped: Vec<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RespondInvitationDto {
    pub accept: bool,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct DeliverInvitationDto {
    pub content_url: String,
    pub reach: i64,
    pub impressions: i64,
    pub engagements: i64,
}
