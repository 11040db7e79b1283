//! Email and password authentication.
//!
//! Registration validates and normalises the submitted fields, hashes the password
//! and stores the account. Logging in checks the hash; both failure cases share one
//! error so responses don't reveal which emails are registered.

use sea_orm::DatabaseConnection;

use crate::{
    model::status::UserRole,
    server::{
        data::{brand::BrandRepository, influencer::InfluencerRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::user::{CreateUserParam, RegisterParam, User},
        service::admin::code::AdminCodeService,
        util::password::{hash_password, verify_password, MIN_PASSWORD_LENGTH},
    },
};

/// Home path for visitors without a session.
pub const LOGIN_PATH: &str = "/login";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    admin_codes: &'a AdminCodeService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, admin_codes: &'a AdminCodeService) -> Self {
        Self { db, admin_codes }
    }

    /// Creates an account.
    ///
    /// The email is trimmed and lower-cased before storage. Registering as ADMIN
    /// consumes the one-time admin code, which is only checked once every other
    /// field is valid and the email is free. The code is handed back if the
    /// account can't be stored.
    ///
    /// # Returns
    /// - `Ok(User)` - The new account
    /// - `Err(AppError::BadRequest)` - Invalid email, empty name, short password
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AuthError::AccessDenied)` - ADMIN requested without a valid code
    pub async fn register(&self, param: RegisterParam) -> Result<User, AppError> {
        let email = normalize_email(&param.email);
        if !email.contains('@') {
            return Err(AppError::BadRequest("A valid email is required".to_string()));
        }

        let name = param.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }

        if param.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            )));
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.email_exists(&email).await? {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }

        let claimed = if param.role == UserRole::Admin {
            let code = param.admin_code.as_deref().unwrap_or_default();
            let Some(claimed) = self.admin_codes.claim(code).await else {
                return Err(AuthError::AccessDenied(
                    0,
                    "Admin registration attempted without a valid admin code".to_string(),
                )
                .into());
            };
            Some(claimed)
        } else {
            None
        };

        let created: Result<User, AppError> = async {
            let password_hash = hash_password(&param.password)?;

            Ok(user_repo
                .create(CreateUserParam {
                    email,
                    name,
                    password_hash,
                    role: param.role,
                })
                .await?)
        }
        .await;

        let user = match created {
            Ok(user) => user,
            Err(e) => {
                if let Some(claimed) = claimed {
                    self.admin_codes.restore(claimed).await;
                }
                return Err(e);
            }
        };

        tracing::info!("Registered user {} with role {}", user.id, user.role);

        Ok(user)
    }

    /// Checks credentials and records the login time.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some((user, hash)) = user_repo
            .find_credentials_by_email(&normalize_email(email))
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        user_repo.touch_last_login(user.id).await?;

        Ok(user_repo.find_by_id(user.id).await?.unwrap_or(user))
    }

    /// Home path for the user's role.
    ///
    /// Brand and influencer users without a profile are sent to onboarding.
    pub async fn redirect_for(&self, user: &User) -> Result<&'static str, AppError> {
        let path = match user.role {
            UserRole::Admin => "/admin",
            UserRole::Brand => {
                let brand = BrandRepository::new(self.db)
                    .find_by_user_id(user.id)
                    .await?;
                if brand.is_some() {
                    "/brand"
                } else {
                    "/brand/onboarding"
                }
            }
            UserRole::Influencer => {
                let influencer = InfluencerRepository::new(self.db)
                    .find_by_user_id(user.id)
                    .await?;
                if influencer.is_some() {
                    "/influencer"
                } else {
                    "/influencer/onboarding"
                }
            }
        };

        Ok(path)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
