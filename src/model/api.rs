use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Error body returned by every failing endpoint.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// A page of results with navigation metadata.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedDto<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Standard `page`/`entries` query parameters for list endpoints.
#[derive(Deserialize, IntoParams)]
pub struct PaginationParam {
    /// Zero-indexed page number.
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 10).
    #[serde(default = "default_entries")]
    pub entries: u64,
}

impl PaginationParam {
    /// Page size clamped to 1..=100.
    pub fn per_page(&self) -> u64 {
        self.entries.clamp(1, MAX_ENTRIES)
    }
}

const MAX_ENTRIES: u64 = 100;

fn default_entries() -> u64 {
    10
}

/// A single count, used by unread counters and bulk operations.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CountDto {
    pub count: u64,
}
