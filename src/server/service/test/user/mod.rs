use crate::{
    model::status::UserRole,
    server::{error::AppError, service::user::UserService},
};
use entity::prelude::*;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod role;
