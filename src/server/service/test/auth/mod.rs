use crate::{
    model::status::UserRole,
    server::{
        error::{auth::AuthError, AppError},
        model::user::RegisterParam,
        service::{admin::code::AdminCodeService, auth::AuthService},
    },
};
use entity::prelude::*;
use test_utils::{builder::TestBuilder, factory};

mod register;

fn register_param(email: &str, role: UserRole) -> RegisterParam {
    RegisterParam {
        email: email.to_string(),
        name: "Ana Lopez".to_string(),
        password: "correct horse".to_string(),
        role,
        admin_code: None,
    }
}
