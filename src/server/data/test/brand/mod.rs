use crate::{
    model::status::ProfileStatus,
    server::{data::brand::BrandRepository, model::brand::SaveBrandParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod update;

fn param(name: &str) -> SaveBrandParam {
    SaveBrandParam {
        name: name.to_string(),
        description: Some("Outdoor gear".to_string()),
        website: None,
        industry: Some("Retail".to_string()),
    }
}
