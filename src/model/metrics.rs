use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Percentage rates for an influencer, each rounded to two decimals.
#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct InfluencerMetricsDto {
    pub influencer_id: i32,
    pub reach_rate: f64,
    pub engagement_rate: f64,
    pub response_rate: f64,
    pub completion_rate: f64,
    pub on_time_delivery_rate: f64,
    pub computed_at: DateTime<Utc>,
}

#[derive(Deserialize, IntoParams)]
pub struct MetricsRefreshParam {
    /// Recompute even if the stored metrics are fresh.
    #[serde(default)]
    pub refresh: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct CampaignMetricsDto {
    pub campaign_id: i32,
    pub invited: u64,
    pub pending: u64,
    pub accepted: u64,
    pub declined: u64,
    pub completed: u64,
    pub total_reach: i64,
    pub total_impressions: i64,
    pub total_engagements: i64,
    pub engagement_rate: f64,
    pub completion_rate: f64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct RoleCountDto {
    pub role: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct StatusCountDto {
    pub status: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct AdminOverviewDto {
    pub users: Vec<RoleCountDto>,
    pub campaigns: Vec<StatusCountDto>,
    pub pending_brands: u64,
    pub pending_influencers: u64,
}
