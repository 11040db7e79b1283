use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{AuthResponseDto, LoginDto, RedirectDto, RegisterDto, UserDto},
    },
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::user::RegisterParam,
        service::auth::{AuthService, LOGIN_PATH},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates the account and logs the new user in. Registering an admin requires the
/// one-time admin code printed at startup.
///
/// # Returns
/// - `201 Created` - Account created, session started
/// - `400 Bad Request` - Invalid email, name or password
/// - `403 Forbidden` - Admin role requested without a valid admin code
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created and logged in", body = AuthResponseDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 403, description = "Invalid admin code", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.admin_code_service);

    let user = service
        .register(RegisterParam {
            email: payload.email,
            name: payload.name,
            password: payload.password,
            role: payload.role,
            admin_code: payload.admin_code,
        })
        .await?;

    // Fresh session ID for the authenticated user
    session.cycle_id().await?;
    AuthSession::new(&session).set_user_id(user.id).await?;

    let redirect = service.redirect_for(&user).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            user: user.into_dto(),
            redirect: redirect.to_string(),
        }),
    ))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Logged in; body carries the user and their landing page
/// - `401 Unauthorized` - Wrong email or password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.admin_code_service);

    let user = service.login(&payload.email, &payload.password).await?;

    session.cycle_id().await?;
    AuthSession::new(&session).set_user_id(user.id).await?;

    let redirect = service.redirect_for(&user).await?;

    Ok((
        StatusCode::OK,
        Json(AuthResponseDto {
            user: user.into_dto(),
            redirect: redirect.to_string(),
        }),
    ))
}

/// Log out and clear the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the currently logged-in user.
///
/// # Returns
/// - `200 OK` - The user
/// - `401 Unauthorized` - No user in session
/// - `404 Not Found` - The session refers to a deleted account
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User no longer exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let Some(user_id) = AuthSession::new(&session).get_user_id().await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    let user = UserRepository::new(&state.db)
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Where the current visitor should land.
///
/// Anonymous visitors are sent to the login page; logged-in users to their role's
/// home, or to onboarding when they have no profile yet.
#[utoipa::path(
    get,
    path = "/api/auth/redirect",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Path to navigate to", body = RedirectDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn redirect(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = match AuthSession::new(&session).get_user_id().await? {
        Some(user_id) => UserRepository::new(&state.db).find_by_id(user_id).await?,
        None => None,
    };

    let redirect = match user {
        Some(user) => AuthService::new(&state.db, &state.admin_code_service)
            .redirect_for(&user)
            .await?,
        None => LOGIN_PATH,
    };

    Ok((
        StatusCode::OK,
        Json(RedirectDto {
            redirect: redirect.to_string(),
        }),
    ))
}
