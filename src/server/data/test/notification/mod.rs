use crate::server::{
    data::notification::NotificationRepository,
    model::notification::{NotificationContent, NotificationKind},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
