use super::*;
use crate::{
    model::platform::OAuthCallbackParam,
    server::{
        error::auth::AuthError,
        middleware::session::OAuthStateSession,
        service::oauth::callback::{check_callback, CallbackOutcome},
    },
};

fn params(code: Option<&str>, state: Option<&str>, error: Option<&str>) -> OAuthCallbackParam {
    OAuthCallbackParam {
        code: code.map(str::to_string),
        state: state.map(str::to_string),
        error: error.map(str::to_string),
    }
}

/// Tests a callback whose state matches the one stored when connecting.
///
/// Expected: Ok(Exchange) carrying the authorization code
#[tokio::test]
async fn matching_state_exchanges_code() -> Result<(), AppError> {
    let outcome = check_callback(
        Some("state-1".to_string()),
        params(Some("code-1"), Some("state-1"), None),
    )?;

    assert_eq!(outcome, CallbackOutcome::Exchange("code-1".to_string()));

    Ok(())
}

/// Tests a callback whose state differs from the stored one.
///
/// Expected: Err(CsrfValidationFailed)
#[tokio::test]
async fn mismatched_state_fails_csrf_check() -> Result<(), AppError> {
    let result = check_callback(
        Some("state-1".to_string()),
        params(Some("code-1"), Some("forged"), None),
    );

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
    ));

    Ok(())
}

/// Tests a callback when no connection flow was started in this session.
///
/// Expected: Err(CsrfValidationFailed)
#[tokio::test]
async fn missing_stored_state_fails_csrf_check() -> Result<(), AppError> {
    let result = check_callback(None, params(Some("code-1"), Some("state-1"), None));

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
    ));

    Ok(())
}

/// Tests a callback arriving without a state parameter.
///
/// Expected: Err(CsrfValidationFailed)
#[tokio::test]
async fn missing_received_state_fails_csrf_check() -> Result<(), AppError> {
    let result = check_callback(
        Some("state-1".to_string()),
        params(Some("code-1"), None, None),
    );

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
    ));

    Ok(())
}

/// Tests a callback where the platform reports the user refused consent.
///
/// Expected: Ok(Denied) even without a stored state
#[tokio::test]
async fn platform_error_is_denied() -> Result<(), AppError> {
    let outcome = check_callback(None, params(None, None, Some("access_denied")))?;

    assert_eq!(outcome, CallbackOutcome::Denied("access_denied".to_string()));

    Ok(())
}

/// Tests a callback with a valid state but no code.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn missing_code_is_bad_request() -> Result<(), AppError> {
    let result = check_callback(Some("state-1".to_string()), params(None, Some("state-1"), None));

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a stored state can only be taken once and is kept per platform.
///
/// Expected: Some on the first take, None on the second, other platforms untouched
#[tokio::test]
async fn stored_state_is_single_use() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let states = OAuthStateSession::new(session);
    states
        .set_state(PlatformKind::TikTok, "tiktok-state".to_string())
        .await?;
    states
        .set_state(PlatformKind::YouTube, "youtube-state".to_string())
        .await?;

    assert_eq!(
        states.take_state(PlatformKind::TikTok).await?,
        Some("tiktok-state".to_string())
    );
    assert_eq!(states.take_state(PlatformKind::TikTok).await?, None);
    assert_eq!(
        states.take_state(PlatformKind::YouTube).await?,
        Some("youtube-state".to_string())
    );

    Ok(())
}
