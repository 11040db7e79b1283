//! User domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::{status::UserRole, user::UserDto};

/// An account holder: an admin, a brand owner or an influencer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Normalised (trimmed, lower-case) email address, unique across users.
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
            created_at: self.created_at,
            last_login_at: self.last_login_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The password hash stays behind in the entity.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Type)` - The stored role isn't a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            role: entity.role.parse()?,
            created_at: entity.created_at,
            last_login_at: entity.last_login_at,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Parameters for inserting a new account.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// Registration input as submitted, before validation and hashing.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: UserRole,
    pub admin_code: Option<String>,
}
