use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        invitation::{DeliverInvitationDto, InvitationDto},
        status::InvitationStatus,
    },
    server::error::AppError,
};

/// An influencer's invitation to a campaign and, once delivered, the results.
#[derive(Debug, Clone, PartialEq)]
pub struct Invitation {
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

impl Invitation {
    pub fn into_dto(self) -> InvitationDto {
        InvitationDto {
            id: self.id,
            campaign_id: self.campaign_id,
            influencer_id: self.influencer_id,
            status: self.status,
            message: self.message,
            invited_at: self.invited_at,
            responded_at: self.responded_at,
            delivered_at: self.delivered_at,
            content_url: self.content_url,
            reach: self.reach,
            impressions: self.impressions,
            engagements: self.engagements,
        }
    }

    pub fn from_entity(entity: entity::campaign_invitation::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            campaign_id: entity.campaign_id,
            influencer_id: entity.influencer_id,
            status: entity.status.parse()?,
            message: entity.message,
            invited_at: entity.invited_at,
            responded_at: entity.responded_at,
            delivered_at: entity.delivered_at,
            content_url: entity.content_url,
            reach: entity.reach,
            impressions: entity.impressions,
            engagements: entity.engagements,
        })
    }

    /// Accepted or completed invitees take part in the campaign.
    pub fn is_participating(&self) -> bool {
        matches!(
            self.status,
            InvitationStatus::Accepted | InvitationStatus::Completed
        )
    }
}

/// Largest reach, impression or engagement count a single delivery may report.
pub const MAX_DELIVERY_FIGURE: i64 = 1_000_000_000_000;

/// Reported results of a delivered piece of content.
#[derive(Debug, Clone)]
pub struct DeliverParam {
    pub content_url: String,
    pub reach: i64,
    pub impressions: i64,
    pub engagements: i64,
}

impl DeliverParam {
    pub fn from_dto(dto: DeliverInvitationDto) -> Self {
        Self {
            content_url: dto.content_url.trim().to_string(),
            reach: dto.reach,
            impressions: dto.impressions,
            engagements: dto.engagements,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.content_url.is_empty() {
            return Err(AppError::BadRequest("Content URL is required".to_string()));
        }
        if url::Url::parse(&self.content_url).is_err() {
            return Err(AppError::BadRequest("Content URL is not a valid URL".to_string()));
        }
        if self.reach < 0 || self.impressions < 0 || self.engagements < 0 {
            return Err(AppError::BadRequest(
                "Reach, impressions and engagements cannot be negative".to_string(),
            ));
        }
        if [self.reach, self.impressions, self.engagements]
            .iter()
            .any(|&figure| figure > MAX_DELIVERY_FIGURE)
        {
            return Err(AppError::BadRequest(format!(
                "Reach, impressions and engagements cannot exceed {}",
                MAX_DELIVERY_FIGURE
            )));
        }

        Ok(())
    }
}
