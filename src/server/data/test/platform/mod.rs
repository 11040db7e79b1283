use crate::server::{
    data::{platform::PlatformRepository, service_item::ServiceItemRepository},
    model::service_item::SaveServiceItemParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
