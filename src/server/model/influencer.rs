//! Influencer profile domain models.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::{
    influencer::{InfluencerDto, InfluencerProfileDto},
    status::ProfileStatus,
};

/// A content creator's profile, owned by exactly one influencer user.
#[derive(Debug, Clone, PartialEq)]
pub struct Influencer {
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

impl Influencer {
    pub fn into_dto(self) -> InfluencerDto {
        InfluencerDto {
            id: self.id,
            user_id: self.user_id,
            display_name: self.display_name,
            bio: self.bio,
            country: self.country,
            category_id: self.category_id,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::influencer::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            display_name: entity.display_name,
            bio: entity.bio,
            country: entity.country,
            category_id: entity.category_id,
            status: entity.status.parse()?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SaveInfluencerParam {
    pub display_name: String,
    pub bio: Option<String>,
    pub country: Option<String>,
    pub category_id: Option<i32>,
}

impl SaveInfluencerParam {
    pub fn from_dto(dto: InfluencerProfileDto) -> Self {
        Self {
            display_name: dto.display_name.trim().to_string(),
            bio: dto.bio,
            country: dto.country,
            category_id: dto.category_id,
        }
    }
}
