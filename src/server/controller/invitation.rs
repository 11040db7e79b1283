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
        invitation::{
            DeliverInvitationDto, InvitationDto, InviteInfluencersDto, InviteResultDto,
            RespondInvitationDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::invitation::{DeliverParam, Invitation},
        service::invitation::InvitationService,
        state::AppState,
    },
};

/// Tag for grouping invitation endpoints in OpenAPI documentation
pub static INVITATION_TAG: &str = "invitation";

/// Invite influencers to a campaign.
///
/// Influencers already invited are skipped and reported back; each new invitee is
/// notified.
///
/// # Access Control
/// - `CampaignOwner` - Admin or the brand owning the campaign
///
/// # Returns
/// - `201 Created` - Invitations created
/// - `400 Bad Request` - Empty list, or an influencer that isn't approved
/// - `409 Conflict` - Campaign is no longer pending or active
#[utoipa::path(
    post,
    path = "/api/campaigns/{campaign_id}/invitations",
    tag = INVITATION_TAG,
    params(
        ("campaign_id" = i32, Path, description = "Campaign ID")
    ),
    request_body = InviteInfluencersDto,
    responses(
        (status = 201, description = "Invitations sent", body = InviteResultDto),
        (status = 400, description = "Invalid influencer list", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the campaign owner", body = ErrorDto),
        (status = 404, description = "Campaign not found", body = ErrorDto),
        (status = 409, description = "Campaign doesn't accept invitations", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn invite_influencers(
    State(state): State<AppState>,
    session: Session,
    Path(campaign_id): Path<i32>,
    Json(payload): Json<InviteInfluencersDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CampaignOwner(campaign_id)])
        .await?;

    let outcome = InvitationService::new(&state.db, &state.app_url)
        .invite(campaign_id, &payload.influencer_ids, payload.message)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(InviteResultDto {
            invited: outcome
                .invited
                .into_iter()
                .map(Invitation::into_dto)
                .collect(),
            skipped: outcome.skipped,
        }),
    ))
}

/// Get the invitations of a campaign.
///
/// # Access Control
/// - `CampaignView` - Admin, the owning brand, or an invited influencer
#[utoipa::path(
    get,
    path = "/api/campaigns/{campaign_id}/invitations",
    tag = INVITATION_TAG,
    params(
        ("campaign_id" = i32, Path, description = "Campaign ID")
    ),
    responses(
        (status = 200, description = "Invitations of the campaign", body = Vec<InvitationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "No access to the campaign", body = ErrorDto),
        (status = 404, description = "Campaign not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_campaign_invitations(
    State(state): State<AppState>,
    session: Session,
    Path(campaign_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CampaignView(campaign_id)])
        .await?;

    let invitations = InvitationService::new(&state.db, &state.app_url)
        .get_by_campaign(campaign_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            invitations
                .into_iter()
                .map(Invitation::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get the current influencer's invitations, newest first.
#[utoipa::path(
    get,
    path = "/api/influencer/invitations",
    tag = INVITATION_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Page of invitations", body = PaginatedDto<InvitationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an influencer", body = ErrorDto),
        (status = 404, description = "No influencer profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_invitations(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Influencer])
        .await?;

    let invitations = InvitationService::new(&state.db, &state.app_url)
        .get_own_paginated(user.id, params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(invitations.into_dto(Invitation::into_dto))))
}

/// Accept or decline an invitation.
///
/// # Access Control
/// - `Influencer` - Only the invited influencer can respond
///
/// # Returns
/// - `200 OK` - Response recorded, brand owner notified
/// - `403 Forbidden` - Invitation belongs to someone else
/// - `409 Conflict` - Already answered, or the campaign isn't active
#[utoipa::path(
    post,
    path = "/api/influencer/invitations/{invitation_id}/respond",
    tag = INVITATION_TAG,
    params(
        ("invitation_id" = i32, Path, description = "Invitation ID")
    ),
    request_body = RespondInvitationDto,
    responses(
        (status = 200, description = "Response recorded", body = InvitationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the invited influencer", body = ErrorDto),
        (status = 404, description = "Invitation not found", body = ErrorDto),
        (status = 409, description = "Invitation can't be answered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn respond_invitation(
    State(state): State<AppState>,
    session: Session,
    Path(invitation_id): Path<i32>,
    Json(payload): Json<RespondInvitationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Influencer])
        .await?;

    let invitation = InvitationService::new(&state.db, &state.app_url)
        .respond(user.id, invitation_id, payload.accept)
        .await?;

    Ok((StatusCode::OK, Json(invitation.into_dto())))
}

/// Submit the delivered content and its reported numbers.
#[utoipa::path(
    post,
    path = "/api/influencer/invitations/{invitation_id}/deliver",
    tag = INVITATION_TAG,
    params(
        ("invitation_id" = i32, Path, description = "Invitation ID")
    ),
    request_body = DeliverInvitationDto,
    responses(
        (status = 200, description = "Deliverable submitted", body = InvitationDto),
        (status = 400, description = "Invalid content URL or negative numbers", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the invited influencer", body = ErrorDto),
        (status = 404, description = "Invitation not found", body = ErrorDto),
        (status = 409, description = "Invitation not accepted, or campaign not active", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deliver_invitation(
    State(state): State<AppState>,
    session: Session,
    Path(invitation_id): Path<i32>,
    Json(payload): Json<DeliverInvitationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Influencer])
        .await?;

    let invitation = InvitationService::new(&state.db, &state.app_url)
        .deliver(user.id, invitation_id, DeliverParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(invitation.into_dto())))
}
