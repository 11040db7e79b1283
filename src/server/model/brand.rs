//! Brand profile domain models.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::{
    brand::{BrandDto, BrandProfileDto},
    status::ProfileStatus,
};

/// An advertiser's profile, owned by exactly one brand user.
#[derive(Debug, Clone, PartialEq)]
pub struct Brand {
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

impl Brand {
    pub fn into_dto(self) -> BrandDto {
        BrandDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            description: self.description,
            website: self.website,
            industry: self.industry,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::brand::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            description: entity.description,
            website: entity.website,
            industry: entity.industry,
            status: entity.status.parse()?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Editable brand profile fields.
#[derive(Debug, Clone)]
pub struct SaveBrandParam {
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub industry: Option<String>,
}

impl SaveBrandParam {
    pub fn from_dto(dto: BrandProfileDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            website: dto.website,
            industry: dto.industry,
        }
    }
}
