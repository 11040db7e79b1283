use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    ///
    /// The request was made without logging in, or the session expired.
    /// Results in a 401 Unauthorized response.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Happens when an admin deletes an account while its session is still alive.
    /// Results in a 404 Not Found response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Email or password did not match a stored account.
    ///
    /// Both cases share one message so the response doesn't reveal which
    /// emails are registered. Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The user is authenticated but lacks a required permission.
    ///
    /// Carries the user's ID and a description of the failed check for logging.
    /// Results in a 403 Forbidden response.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The state returned by the platform does not match the one stored in the
    /// session, or none was stored. Results in a 400 Bad Request response.
    #[error("OAuth callback state mismatch")]
    CsrfValidationFailed,

    /// The authorization code could not be exchanged for a token.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `InvalidCredentials` → 401 Unauthorized
/// - `UserNotInDatabase` → 404 Not Found with "User not found"
/// - `AccessDenied` → 403 Forbidden with a generic message
/// - `CsrfValidationFailed` → 400 Bad Request
/// - `TokenExchange` → 500 Internal Server Error
///
/// Denials are logged at debug level with the detailed reason while the client
/// receives a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "Not logged in".to_string()),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found".to_string()),
            Self::AccessDenied(_, _) => {
                tracing::debug!("{}", self);
                (StatusCode::FORBIDDEN, "Access denied".to_string())
            }
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                "There was an issue connecting your account, please try again.".to_string(),
            ),
            Self::TokenExchange(_) => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
