//! Social platform domain models.

use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};

use crate::model::{
    platform::{PlatformAccountDto, PlatformDto},
    status::UnknownVariant,
};

/// The social networks an influencer can connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKind {
    Instagram,
    Facebook,
    TikTok,
    YouTube,
}

impl PlatformKind {
    pub const ALL: [PlatformKind; 4] = [
        Self::Instagram,
        Self::Facebook,
        Self::TikTok,
        Self::YouTube,
    ];

    /// URL and database identifier of the platform.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
            Self::TikTok => "tiktok",
            Self::YouTube => "youtube",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::Facebook => "Facebook",
            Self::TikTok => "TikTok",
            Self::YouTube => "YouTube",
        }
    }
}

impl FromStr for PlatformKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "platform",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub active: bool,
}

impl Platform {
    pub fn into_dto(self) -> PlatformDto {
        PlatformDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            active: self.active,
        }
    }

    pub fn from_entity(entity: entity::platform::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            active: entity.active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePlatformParam {
    pub name: String,
    pub slug: String,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct UpdatePlatformParam {
    pub name: String,
    pub active: bool,
}

/// An influencer's connected account on a platform.
///
/// Access tokens are kept in the entity and never copied into this model.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformAccount {
    pub id: i32,
    pub influencer_id: i32,
    pub platform_id: i32,
    pub platform_slug: String,
    pub external_id: String,
    pub username: String,
    pub followers_count: i64,
    pub connected_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PlatformAccount {
    pub fn into_dto(self) -> PlatformAccountDto {
        PlatformAccountDto {
            id: self.id,
            platform_id: self.platform_id,
            platform_slug: self.platform_slug,
            username: self.username,
            followers_count: self.followers_count,
            connected_at: self.connected_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(
        entity: entity::platform_account::Model,
        platform: &entity::platform::Model,
    ) -> Self {
        Self {
            id: entity.id,
            influencer_id: entity.influencer_id,
            platform_id: entity.platform_id,
            platform_slug: platform.slug.clone(),
            external_id: entity.external_id,
            username: entity.username,
            followers_count: entity.followers_count,
            connected_at: entity.connected_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Account details read from a platform's API after a successful authorization.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformProfile {
    pub external_id: String,
    pub username: String,
    pub followers_count: i64,
}

/// Everything stored when an account is connected or reconnected.
#[derive(Debug, Clone)]
pub struct UpsertPlatformAccountParam {
    pub influencer_id: i32,
    pub platform_id: i32,
    pub profile: PlatformProfile,
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub token_expires_at: Option<DateTime<Utc>>,
}
