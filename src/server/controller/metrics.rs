use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        metrics::{CampaignMetricsDto, InfluencerMetricsDto, MetricsRefreshParam},
        status::UserRole,
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        service::{influencer::InfluencerService, metrics::MetricsService},
        state::AppState,
    },
};

/// Tag for grouping metrics endpoints in OpenAPI documentation
pub static METRICS_TAG: &str = "metrics";

/// Get an influencer's performance rates.
///
/// Stored rates younger than an hour are returned as they are; older ones, or any
/// request with `refresh=true`, are recomputed and stored.
///
/// # Access Control
/// - `Admin` or `Brand` - Any influencer
/// - `Influencer` - Only their own profile
#[utoipa::path(
    get,
    path = "/api/influencers/{influencer_id}/metrics",
    tag = METRICS_TAG,
    params(
        ("influencer_id" = i32, Path, description = "Influencer ID"),
        MetricsRefreshParam
    ),
    responses(
        (status = 200, description = "Influencer rates", body = InfluencerMetricsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Another influencer's metrics", body = ErrorDto),
        (status = 404, description = "Influencer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_influencer_metrics(
    State(state): State<AppState>,
    session: Session,
    Path(influencer_id): Path<i32>,
    Query(params): Query<MetricsRefreshParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    if user.role == UserRole::Influencer {
        let own = InfluencerService::new(&state.db, &state.app_url)
            .get_own(user.id)
            .await?;
        if own.id != influencer_id {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("Influencer {} metrics belong to someone else", influencer_id),
            )
            .into());
        }
    }

    let metrics = MetricsService::new(&state.db)
        .influencer(influencer_id, params.refresh, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(metrics.into_dto())))
}

/// Get invitation and delivery totals for a campaign.
///
/// # Access Control
/// - `CampaignView` - Admin, the owning brand, or an invited influencer
#[utoipa::path(
    get,
    path = "/api/campaigns/{campaign_id}/metrics",
    tag = METRICS_TAG,
    params(
        ("campaign_id" = i32, Path, description = "Campaign ID")
    ),
    responses(
        (status = 200, description = "Campaign totals", body = CampaignMetricsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "No access to the campaign", body = ErrorDto),
        (status = 404, description = "Campaign not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_campaign_metrics(
    State(state): State<AppState>,
    session: Session,
    Path(campaign_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CampaignView(campaign_id)])
        .await?;

    let metrics = MetricsService::new(&state.db).campaign(campaign_id).await?;

    Ok((StatusCode::OK, Json(metrics.into_dto())))
}
