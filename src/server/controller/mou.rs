use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        mou::{MouDecisionDto, MouDto, SaveMouDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::mou::MouService,
        state::AppState,
    },
};

/// Tag for grouping MOU endpoints in OpenAPI documentation
pub static MOU_TAG: &str = "mou";

/// Get the MOU of a campaign with its approvals and the parties still to decide.
///
/// # Access Control
/// - `CampaignView` - Admin, the owning brand, or an invited influencer
#[utoipa::path(
    get,
    path = "/api/campaigns/{campaign_id}/mou",
    tag = MOU_TAG,
    params(
        ("campaign_id" = i32, Path, description = "Campaign ID")
    ),
    responses(
        (status = 200, description = "The campaign's MOU", body = MouDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "No access to the campaign", body = ErrorDto),
        (status = 404, description = "Campaign not found or no MOU yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mou(
    State(state): State<AppState>,
    session: Session,
    Path(campaign_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CampaignView(campaign_id)])
        .await?;

    let (mou, pending) = MouService::new(&state.db, &state.app_url)
        .get(campaign_id)
        .await?;

    Ok((StatusCode::OK, Json(mou.into_dto(pending))))
}

/// Attach or replace the campaign's MOU document.
///
/// Replacing the document restarts the approval round: the status returns to
/// PENDING, earlier decisions are cleared and every required party is notified.
///
/// # Access Control
/// - `CampaignOwner` - Admin or the brand owning the campaign
#[utoipa::path(
    put,
    path = "/api/campaigns/{campaign_id}/mou",
    tag = MOU_TAG,
    params(
        ("campaign_id" = i32, Path, description = "Campaign ID")
    ),
    request_body = SaveMouDto,
    responses(
        (status = 200, description = "MOU saved", body = MouDto),
        (status = 400, description = "Missing title or invalid document URL", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the campaign owner", body = ErrorDto),
        (status = 404, description = "Campaign not found", body = ErrorDto),
        (status = 409, description = "Campaign is closed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_mou(
    State(state): State<AppState>,
    session: Session,
    Path(campaign_id): Path<i32>,
    Json(payload): Json<SaveMouDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CampaignOwner(campaign_id)])
        .await?;

    let (mou, pending) = MouService::new(&state.db, &state.app_url)
        .upsert(campaign_id, &payload.title, &payload.document_url)
        .await?;

    Ok((StatusCode::OK, Json(mou.into_dto(pending))))
}

/// Approve or reject the campaign's MOU.
///
/// Admins, the brand owner and participating influencers decide once per
/// document. Party membership is checked by the service, so only a login is
/// required here.
#[utoipa::path(
    post,
    path = "/api/campaigns/{campaign_id}/mou/decision",
    tag = MOU_TAG,
    params(
        ("campaign_id" = i32, Path, description = "Campaign ID")
    ),
    request_body = MouDecisionDto,
    responses(
        (status = 200, description = "Decision recorded", body = MouDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a party to the MOU", body = ErrorDto),
        (status = 404, description = "Campaign not found or no MOU yet", body = ErrorDto),
        (status = 409, description = "Already decided, or MOU settled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decide_mou(
    State(state): State<AppState>,
    session: Session,
    Path(campaign_id): Path<i32>,
    Json(payload): Json<MouDecisionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let (mou, pending) = MouService::new(&state.db, &state.app_url)
        .decide(&user, campaign_id, payload.approve, payload.comment)
        .await?;

    Ok((StatusCode::OK, Json(mou.into_dto(pending))))
}
