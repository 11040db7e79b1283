use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::status::{MouDecision, MouParty, MouStatus};

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct MouApprovalDto {
    pub user_id: i32,
    pub party: MouParty,
    pub decision: MouDecision,
    pub comment: Option<String>,
    pub decided_at: DateTime<Utc>,
}

/// A party whose sign-off is still outstanding.
#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct PendingPartyDto {
    pub party: MouParty,
    /// The user expected to decide; `None` means any admin.
    pub user_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct MouDto {
    pub id: i32,
    pub campaign_id: i32,
    pub title: String,
    pub document_url: String,
    pub status: MouStatus,
    pub approvals: Vec<MouApprovalDto>,
    pub pending_parties: Vec<PendingPartyDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SaveMouDto {
    pub title: String,
    pub document_url: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MouDecisionDto {
    pub approve: bool,
    pub comment: Option<String>,
}
