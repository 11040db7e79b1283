use crate::{
    model::status::UserRole,
    server::{data::user::UserRepository, model::user::CreateUserParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_credentials_by_email;
mod get_all_paginated;
