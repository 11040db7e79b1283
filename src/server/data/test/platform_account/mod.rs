use crate::server::{
    data::platform_account::PlatformAccountRepository,
    model::platform::{PlatformProfile, UpsertPlatformAccountParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod upsert;

fn param(influencer_id: i32, platform_id: i32, followers: i64) -> UpsertPlatformAccountParam {
    UpsertPlatformAccountParam {
        influencer_id,
        platform_id,
        profile: PlatformProfile {
            external_id: "17841400000".to_string(),
            username: "trailrunner".to_string(),
            followers_count: followers,
        },
        access_token: "token".to_string(),
        refresh_token: None,
        token_expires_at: None,
    }
}
