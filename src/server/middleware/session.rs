//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the keys relevant
//! to its concern:
//! - `AuthSession` - ID of the logged-in user
//! - `OAuthStateSession` - CSRF state of pending platform connections

use tower_sessions::Session;

use crate::server::{error::AppError, model::platform::PlatformKind};

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_OAUTH_STATE_PREFIX: &str = "oauth:state:";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's ID in the session, logging them in.
    ///
    /// The session ID is cycled first so a session fixed before login can't be reused.
    ///
    /// # Returns
    /// - `Ok(())` - User ID stored
    /// - `Err(AppError::SessionErr(_))` - Failed to write the session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the logged-in user's ID.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Removes all session data, used on logout.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// OAuth CSRF state management.
///
/// Every platform gets its own key so connecting two platforms in parallel tabs
/// doesn't invalidate either flow.
pub struct OAuthStateSession<'a> {
    session: &'a Session,
}

impl<'a> OAuthStateSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    fn key(kind: PlatformKind) -> String {
        format!("{}{}", SESSION_OAUTH_STATE_PREFIX, kind.slug())
    }

    /// Stores the CSRF state issued with an authorization URL.
    pub async fn set_state(&self, kind: PlatformKind, state: String) -> Result<(), AppError> {
        self.session.insert(&Self::key(kind), state).await?;
        Ok(())
    }

    /// Retrieves and removes the stored state; each state can be used once.
    ///
    /// # Returns
    /// - `Ok(Some(state))` - State was stored and is now removed
    /// - `Ok(None)` - No connection flow was started for the platform
    pub async fn take_state(&self, kind: PlatformKind) -> Result<Option<String>, AppError> {
        Ok(self.session.remove::<String>(&Self::key(kind)).await?)
    }
}
