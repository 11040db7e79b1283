//! Campaign domain models and the status workflow.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        campaign::{CampaignDto, SaveCampaignDto},
        status::CampaignStatus,
    },
    server::error::AppError,
};

impl CampaignStatus {
    /// Whether a campaign in this status may move to `next`.
    ///
    /// | from    | to                             |
    /// |---------|--------------------------------|
    /// | PENDING | ACTIVE, REJECTED, CANCELLED    |
    /// | ACTIVE  | CANCELLED, COMPLETED           |
    ///
    /// REJECTED, COMPLETED and CANCELLED are terminal.
    pub fn can_transition_to(&self, next: CampaignStatus) -> bool {
        use CampaignStatus::*;

        matches!(
            (self, next),
            (Pending, Active)
                | (Pending, Rejected)
                | (Pending, Cancelled)
                | (Active, Cancelled)
                | (Active, Completed)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CampaignStatus::Rejected | CampaignStatus::Completed | CampaignStatus::Cancelled
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Campaign {
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

impl Campaign {
    pub fn into_dto(self) -> CampaignDto {
        CampaignDto {
            id: self.id,
            brand_id: self.brand_id,
            category_id: self.category_id,
            name: self.name,
            description: self.description,
            budget: self.budget,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status,
            rejection_reason: self.rejection_reason,
            service_ids: self.service_ids,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(
        entity: entity::campaign::Model,
        service_ids: Vec<i32>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            brand_id: entity.brand_id,
            category_id: entity.category_id,
            name: entity.name,
            description: entity.description,
            budget: entity.budget,
            start_date: entity.start_date,
            end_date: entity.end_date,
            status: entity.status.parse()?,
            rejection_reason: entity.rejection_reason,
            service_ids,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Active campaigns past their end date are due to be completed.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.status == CampaignStatus::Active && self.end_date < now
    }
}

/// Campaign fields submitted on create and update.
#[derive(Debug, Clone)]
pub struct SaveCampaignParam {
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<i32>,
    pub budget: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub service_ids: Vec<i32>,
}

impl SaveCampaignParam {
    pub fn from_dto(dto: SaveCampaignDto) -> Self {
        let mut service_ids = dto.service_ids;
        service_ids.sort_unstable();
        service_ids.dedup();

        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            category_id: dto.category_id,
            budget: dto.budget,
            start_date: dto.start_date,
            end_date: dto.end_date,
            service_ids,
        }
    }

    /// Checks the fields that don't need the database.
    ///
    /// # Returns
    /// - `Ok(())` - Name present, budget non-negative and end after start
    /// - `Err(AppError::BadRequest)` - Describing the first failed check
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.is_empty() {
            return Err(AppError::BadRequest(
                "Campaign name is required".to_string(),
            ));
        }
        if self.budget < 0 {
            return Err(AppError::BadRequest(
                "Budget cannot be negative".to_string(),
            ));
        }
        if self.end_date <= self.start_date {
            return Err(AppError::BadRequest(
                "End date must be after start date".to_string(),
            ));
        }

        Ok(())
    }
}

/// Which campaigns a listing covers, derived from the caller's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignScope {
    All,
    /// Campaigns owned by the brand.
    Brand(i32),
    /// Campaigns the influencer holds an invitation to.
    Influencer(i32),
}
