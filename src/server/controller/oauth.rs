use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        platform::{OAuthCallbackParam, PlatformAccountDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::OAuthStateSession,
        },
        model::platform::{PlatformAccount, PlatformKind},
        service::{
            influencer::InfluencerService,
            oauth::{
                callback::{check_callback, CallbackOutcome},
                PlatformConnectService,
            },
        },
        state::AppState,
    },
};

/// Tag for grouping platform connection endpoints in OpenAPI documentation
pub static OAUTH_TAG: &str = "oauth";

/// Start connecting a social account.
///
/// Redirects the influencer to the platform's consent screen. The CSRF state sent
/// along is kept in the session under a key for this platform.
///
/// # Access Control
/// - `Influencer` - Requires an influencer profile
///
/// # Returns
/// - `307 Temporary Redirect` - To the platform's authorization page
/// - `400 Bad Request` - The platform has no credentials configured
/// - `404 Not Found` - Unknown platform or no influencer profile
#[utoipa::path(
    get,
    path = "/api/oauth/{platform}/connect",
    tag = OAUTH_TAG,
    params(
        ("platform" = String, Path, description = "Platform slug: instagram, facebook, tiktok or youtube")
    ),
    responses(
        (status = 307, description = "Redirect to the platform's consent screen"),
        (status = 400, description = "Platform not configured", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an influencer", body = ErrorDto),
        (status = 404, description = "Unknown platform or no influencer profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn connect(
    State(state): State<AppState>,
    session: Session,
    Path(platform): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let kind = platform_kind(&platform)?;

    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Influencer])
        .await?;
    InfluencerService::new(&state.db, &state.app_url)
        .get_own(user.id)
        .await?;

    let service =
        PlatformConnectService::new(&state.db, &state.http_client, &state.oauth_clients);
    let (url, csrf_token) = service.authorize_url(kind)?;

    OAuthStateSession::new(&session)
        .set_state(kind, csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Finish connecting a social account.
///
/// The platform redirects here with an authorization code. After the state check
/// the code is exchanged, the account profile fetched and stored, and the
/// influencer sent back to their platforms page with `?connected={platform}`.
/// When the platform reports an error the redirect carries `?error={platform}`.
///
/// # Returns
/// - `303 See Other` - Back to the influencer's platforms page
/// - `400 Bad Request` - State missing or not matching, or no code
/// - `500 Internal Server Error` - Token exchange or profile request failed
#[utoipa::path(
    get,
    path = "/api/oauth/{platform}/callback",
    tag = OAUTH_TAG,
    params(
        ("platform" = String, Path, description = "Platform slug"),
        OAuthCallbackParam
    ),
    responses(
        (status = 303, description = "Redirect back to the influencer's platforms page"),
        (status = 400, description = "CSRF state mismatch or missing code", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an influencer", body = ErrorDto),
        (status = 404, description = "Unknown platform or no influencer profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Path(platform): Path<String>,
    Query(params): Query<OAuthCallbackParam>,
) -> Result<impl IntoResponse, AppError> {
    let kind = platform_kind(&platform)?;

    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Influencer])
        .await?;
    let influencer = InfluencerService::new(&state.db, &state.app_url)
        .get_own(user.id)
        .await?;

    let stored_state = OAuthStateSession::new(&session).take_state(kind).await?;

    let code = match check_callback(stored_state, params)? {
        CallbackOutcome::Exchange(code) => code,
        CallbackOutcome::Denied(error) => {
            tracing::warn!(
                "{} authorization for influencer {} failed: {}",
                kind,
                influencer.id,
                error
            );
            return Ok(Redirect::to(&platforms_page(&state.app_url, "error", kind)));
        }
    };

    PlatformConnectService::new(&state.db, &state.http_client, &state.oauth_clients)
        .callback(kind, influencer.id, code)
        .await?;

    Ok(Redirect::to(&platforms_page(&state.app_url, "connected", kind)))
}

/// Get the current influencer's connected accounts. Tokens are never returned.
#[utoipa::path(
    get,
    path = "/api/influencer/accounts",
    tag = OAUTH_TAG,
    responses(
        (status = 200, description = "Connected accounts", body = Vec<PlatformAccountDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an influencer", body = ErrorDto),
        (status = 404, description = "No influencer profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_accounts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Influencer])
        .await?;
    let influencer = InfluencerService::new(&state.db, &state.app_url)
        .get_own(user.id)
        .await?;

    let accounts =
        PlatformConnectService::new(&state.db, &state.http_client, &state.oauth_clients)
            .accounts(influencer.id)
            .await?;

    Ok((
        StatusCode::OK,
        Json(
            accounts
                .into_iter()
                .map(PlatformAccount::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Disconnect the current influencer's account on a platform.
#[utoipa::path(
    delete,
    path = "/api/influencer/accounts/{platform}",
    tag = OAUTH_TAG,
    params(
        ("platform" = String, Path, description = "Platform slug")
    ),
    responses(
        (status = 204, description = "Account disconnected"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an influencer", body = ErrorDto),
        (status = 404, description = "Unknown platform or no account connected", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn disconnect(
    State(state): State<AppState>,
    session: Session,
    Path(platform): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let kind = platform_kind(&platform)?;

    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Influencer])
        .await?;
    let influencer = InfluencerService::new(&state.db, &state.app_url)
        .get_own(user.id)
        .await?;

    PlatformConnectService::new(&state.db, &state.http_client, &state.oauth_clients)
        .disconnect(influencer.id, kind)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

fn platform_kind(slug: &str) -> Result<PlatformKind, AppError> {
    slug.parse()
        .map_err(|e: crate::model::status::UnknownVariant| AppError::NotFound(e.to_string()))
}

fn platforms_page(app_url: &str, outcome: &str, kind: PlatformKind) -> String {
    format!(
        "{}/influencer/platforms?{}={}",
        app_url,
        outcome,
        kind.slug()
    )
}
