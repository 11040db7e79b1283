use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto, PaginationParam},
        campaign::{CampaignDto, CampaignFilterParam, RejectCampaignDto, SaveCampaignDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::campaign::{Campaign, SaveCampaignParam},
        service::campaign::CampaignService,
        state::AppState,
    },
};

/// Tag for grouping campaign endpoints in OpenAPI documentation
pub static CAMPAIGN_TAG: &str = "campaign";

/// Create a campaign.
///
/// The campaign starts out PENDING until an admin approves it. Every admin is
/// notified.
///
/// # Access Control
/// - `Brand` - Requires an approved brand profile
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Campaign name, budget, dates, category and requested services
///
/// # Returns
/// - `201 Created` - Campaign created
/// - `400 Bad Request` - Invalid dates, budget, category or services
/// - `403 Forbidden` - Not a brand user, or brand not approved
/// - `404 Not Found` - No brand profile
#[utoipa::path(
    post,
    path = "/api/campaigns",
    tag = CAMPAIGN_TAG,
    request_body = SaveCampaignDto,
    responses(
        (status = 201, description = "Campaign created", body = CampaignDto),
        (status = 400, description = "Invalid campaign data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an approved brand", body = ErrorDto),
        (status = 404, description = "No brand profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_campaign(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveCampaignDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Brand])
        .await?;

    let campaign = CampaignService::new(&state.db, &state.app_url)
        .create(user.id, SaveCampaignParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(campaign.into_dto())))
}

/// Get campaigns visible to the current user, newest first.
///
/// Admins see every campaign, brands their own and influencers the campaigns they
/// were invited to.
#[utoipa::path(
    get,
    path = "/api/campaigns",
    tag = CAMPAIGN_TAG,
    params(CampaignFilterParam, PaginationParam),
    responses(
        (status = 200, description = "Page of campaigns", body = PaginatedDto<CampaignDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_campaigns(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<CampaignFilterParam>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let campaigns = CampaignService::new(&state.db, &state.app_url)
        .get_paginated(&user, filter.status, params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(campaigns.into_dto(Campaign::into_dto))))
}

/// Get a campaign.
///
/// An active campaign past its end date is completed before it is returned.
///
/// # Access Control
/// - `CampaignView` - Admin, the owning brand, or an invited influencer
#[utoipa::path(
    get,
    path = "/api/campaigns/{campaign_id}",
    tag = CAMPAIGN_TAG,
    params(
        ("campaign_id" = i32, Path, description = "Campaign ID")
    ),
    responses(
        (status = 200, description = "Campaign", body = CampaignDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "No access to the campaign", body = ErrorDto),
        (status = 404, description = "Campaign not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_campaign(
    State(state): State<AppState>,
    session: Session,
    Path(campaign_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CampaignView(campaign_id)])
        .await?;

    let campaign = CampaignService::new(&state.db, &state.app_url)
        .get(campaign_id)
        .await?;

    Ok((StatusCode::OK, Json(campaign.into_dto())))
}

/// Edit a campaign that is still awaiting approval.
#[utoipa::path(
    put,
    path = "/api/campaigns/{campaign_id}",
    tag = CAMPAIGN_TAG,
    params(
        ("campaign_id" = i32, Path, description = "Campaign ID")
    ),
    request_body = SaveCampaignDto,
    responses(
        (status = 200, description = "Campaign updated", body = CampaignDto),
        (status = 400, description = "Invalid campaign data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the campaign owner", body = ErrorDto),
        (status = 404, description = "Campaign not found", body = ErrorDto),
        (status = 409, description = "Campaign is no longer pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_campaign(
    State(state): State<AppState>,
    session: Session,
    Path(campaign_id): Path<i32>,
    Json(payload): Json<SaveCampaignDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CampaignOwner(campaign_id)])
        .await?;

    let campaign = CampaignService::new(&state.db, &state.app_url)
        .update(campaign_id, SaveCampaignParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(campaign.into_dto())))
}

/// Cancel a pending or active campaign.
///
/// The brand owner and participating influencers are notified.
#[utoipa::path(
    post,
    path = "/api/campaigns/{campaign_id}/cancel",
    tag = CAMPAIGN_TAG,
    params(
        ("campaign_id" = i32, Path, description = "Campaign ID")
    ),
    responses(
        (status = 200, description = "Campaign cancelled", body = CampaignDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the campaign owner", body = ErrorDto),
        (status = 404, description = "Campaign not found", body = ErrorDto),
        (status = 409, description = "Campaign can't be cancelled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_campaign(
    State(state): State<AppState>,
    session: Session,
    Path(campaign_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CampaignOwner(campaign_id)])
        .await?;

    let campaign = CampaignService::new(&state.db, &state.app_url)
        .cancel(campaign_id)
        .await?;

    Ok((StatusCode::OK, Json(campaign.into_dto())))
}

/// Complete an active campaign.
///
/// The brand owner and every influencer with an accepted or completed invitation
/// receive a notification.
#[utoipa::path(
    post,
    path = "/api/campaigns/{campaign_id}/complete",
    tag = CAMPAIGN_TAG,
    params(
        ("campaign_id" = i32, Path, description = "Campaign ID")
    ),
    responses(
        (status = 200, description = "Campaign completed", body = CampaignDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the campaign owner", body = ErrorDto),
        (status = 404, description = "Campaign not found", body = ErrorDto),
        (status = 409, description = "Campaign isn't active", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn complete_campaign(
    State(state): State<AppState>,
    session: Session,
    Path(campaign_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CampaignOwner(campaign_id)])
        .await?;

    let campaign = CampaignService::new(&state.db, &state.app_url)
        .complete(campaign_id)
        .await?;

    Ok((StatusCode::OK, Json(campaign.into_dto())))
}

/// Approve a pending campaign, making it active.
///
/// # Access Control
/// - `Admin` - Only admins approve campaigns
#[utoipa::path(
    post,
    path = "/api/admin/campaigns/{campaign_id}/approve",
    tag = CAMPAIGN_TAG,
    params(
        ("campaign_id" = i32, Path, description = "Campaign ID")
    ),
    responses(
        (status = 200, description = "Campaign approved", body = CampaignDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Campaign not found", body = ErrorDto),
        (status = 409, description = "Campaign isn't pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_campaign(
    State(state): State<AppState>,
    session: Session,
    Path(campaign_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let campaign = CampaignService::new(&state.db, &state.app_url)
        .approve(campaign_id)
        .await?;

    Ok((StatusCode::OK, Json(campaign.into_dto())))
}

/// Reject a pending campaign with a reason shown to the brand.
#[utoipa::path(
    post,
    path = "/api/admin/campaigns/{campaign_id}/reject",
    tag = CAMPAIGN_TAG,
    params(
        ("campaign_id" = i32, Path, description = "Campaign ID")
    ),
    request_body = RejectCampaignDto,
    responses(
        (status = 200, description = "Campaign rejected", body = CampaignDto),
        (status = 400, description = "Missing reason", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Campaign not found", body = ErrorDto),
        (status = 409, description = "Campaign isn't pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_campaign(
    State(state): State<AppState>,
    session: Session,
    Path(campaign_id): Path<i32>,
    Json(payload): Json<RejectCampaignDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let campaign = CampaignService::new(&state.db, &state.app_url)
        .reject(campaign_id, &payload.reason)
        .await?;

    Ok((StatusCode::OK, Json(campaign.into_dto())))
}
