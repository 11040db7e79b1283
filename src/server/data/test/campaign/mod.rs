use crate::{
    model::status::CampaignStatus,
    server::{
        data::campaign::CampaignRepository,
        model::campaign::{CampaignScope, SaveCampaignParam},
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_expired;
mod get_paginated;
mod set_status;

fn param(service_ids: Vec<i32>) -> SaveCampaignParam {
    let now = Utc::now();
    SaveCampaignParam {
        name: "Spring launch".to_string(),
        description: None,
        category_id: None,
        budget: 5000,
        start_date: now,
        end_date: now + Duration::days(14),
        service_ids,
    }
}
