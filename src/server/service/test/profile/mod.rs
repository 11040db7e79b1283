use super::APP_URL;
use crate::{
    model::status::ProfileStatus,
    server::{
        error::AppError,
        model::{brand::SaveBrandParam, influencer::SaveInfluencerParam},
        service::{
            brand::BrandService, influencer::InfluencerService,
            notification::NotificationService,
        },
    },
};
use test_utils::{builder::TestBuilder, factory};

mod brand;
mod influencer;
