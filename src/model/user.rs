use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::status::UserRole;

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: UserRole,
    /// One-time code printed at startup, required to register an admin.
    pub admin_code: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// The authenticated user and the page their role lands on.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    pub user: UserDto,
    pub redirect: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RedirectDto {
    pub redirect: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateUserRoleDto {
    pub role: UserRole,
}
