use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, campaign::ExpiredCampaignsDto, metrics::AdminOverviewDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{campaign::CampaignService, metrics::MetricsService},
        state::AppState,
    },
};

/// Tag for grouping admin dashboard endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Get the admin dashboard counters.
///
/// Users per role, campaigns per status and profiles awaiting review.
///
/// # Access Control
/// - `Admin` - Only admins can view the overview
#[utoipa::path(
    get,
    path = "/api/admin/overview",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Dashboard counters", body = AdminOverviewDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_overview(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let overview = MetricsService::new(&state.db).overview().await?;

    Ok((StatusCode::OK, Json(overview.into_dto())))
}

/// Complete every active campaign past its end date.
///
/// Runs the same sweep as the scheduler, on demand.
///
/// # Access Control
/// - `Admin` - Only admins can trigger the sweep
///
/// # Returns
/// - `200 OK` - Number of campaigns completed by this run
#[utoipa::path(
    post,
    path = "/api/admin/campaigns/expire",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Sweep finished", body = ExpiredCampaignsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn expire_campaigns(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let expired = CampaignService::new(&state.db, &state.app_url)
        .expire_due(Utc::now())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ExpiredCampaignsDto {
            expired: expired as u64,
        }),
    ))
}
