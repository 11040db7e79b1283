use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct PlatformDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub active: bool,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreatePlatformDto {
    pub name: String,
    /// One of `instagram`, `facebook`, `tiktok` or `youtube`.
    pub slug: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdatePlatformDto {
    pub name: String,
    pub active: bool,
}

#[derive(Deserialize, IntoParams)]
pub struct PlatformListParam {
    /// Include inactive platforms (admin only).
    #[serde(default)]
    pub all: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct ServiceItemDto {
    pub id: i32,
    pub platform_id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SaveServiceItemDto {
    pub name: String,
    pub description: Option<String>,
}

/// A connected social account. Tokens never leave the server.
#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct PlatformAccountDto {
    pub id: i32,
    pub platform_id: i32,
    pub platform_slug: String,
    pub username: String,
    pub followers_count: i64,
    pub connected_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Query parameters the platform appends when redirecting back to us.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct OAuthCallbackParam {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}
