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
        brand::{ProfileFilterParam, ReviewProfileDto},
        influencer::{BrowseInfluencersParam, InfluencerDto, InfluencerProfileDto},
        status::UserRole,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::influencer::{Influencer, SaveInfluencerParam},
        service::influencer::InfluencerService,
        state::AppState,
    },
};

/// Tag for grouping influencer endpoints in OpenAPI documentation
pub static INFLUENCER_TAG: &str = "influencer";

/// Roles allowed to look through the influencer directory.
const DIRECTORY_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Brand];

/// Submit the influencer profile for review.
///
/// # Access Control
/// - `Influencer` - Only influencer users have an influencer profile
///
/// # Returns
/// - `201 Created` - Profile submitted, admins notified
/// - `400 Bad Request` - Missing display name or unknown category
/// - `409 Conflict` - The user already has a profile
#[utoipa::path(
    post,
    path = "/api/influencer/profile",
    tag = INFLUENCER_TAG,
    request_body = InfluencerProfileDto,
    responses(
        (status = 201, description = "Profile submitted", body = InfluencerDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an influencer", body = ErrorDto),
        (status = 409, description = "Profile already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_influencer_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<InfluencerProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Influencer])
        .await?;

    let influencer = InfluencerService::new(&state.db, &state.app_url)
        .create(user.id, SaveInfluencerParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(influencer.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/influencer/profile",
    tag = INFLUENCER_TAG,
    responses(
        (status = 200, description = "Influencer profile", body = InfluencerDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an influencer", body = ErrorDto),
        (status = 404, description = "No profile yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_influencer_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Influencer])
        .await?;

    let influencer = InfluencerService::new(&state.db, &state.app_url)
        .get_own(user.id)
        .await?;

    Ok((StatusCode::OK, Json(influencer.into_dto())))
}

/// Update the current user's influencer profile.
///
/// Editing a rejected profile sends it back for review.
#[utoipa::path(
    put,
    path = "/api/influencer/profile",
    tag = INFLUENCER_TAG,
    request_body = InfluencerProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = InfluencerDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an influencer", body = ErrorDto),
        (status = 404, description = "No profile yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_influencer_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<InfluencerProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Influencer])
        .await?;

    let influencer = InfluencerService::new(&state.db, &state.app_url)
        .update_own(user.id, SaveInfluencerParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(influencer.into_dto())))
}

/// Browse approved influencers.
///
/// # Access Control
/// - `Admin` or `Brand` - Brands pick influencers to invite from this list
///
/// # Arguments
/// - `filter` - Optional category to narrow the list to
/// - `params` - Pagination parameters (page and entries)
#[utoipa::path(
    get,
    path = "/api/influencers",
    tag = INFLUENCER_TAG,
    params(BrowseInfluencersParam, PaginationParam),
    responses(
        (status = 200, description = "Page of approved influencers", body = PaginatedDto<InfluencerDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Influencers can't browse the directory", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn browse_influencers(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<BrowseInfluencersParam>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AnyRole(DIRECTORY_ROLES)])
        .await?;

    let influencers = InfluencerService::new(&state.db, &state.app_url)
        .browse(filter.category_id, params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(influencers.into_dto(Influencer::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/influencers/{influencer_id}",
    tag = INFLUENCER_TAG,
    params(
        ("influencer_id" = i32, Path, description = "Influencer ID")
    ),
    responses(
        (status = 200, description = "Influencer profile", body = InfluencerDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Influencers can't browse the directory", body = ErrorDto),
        (status = 404, description = "Influencer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_influencer(
    State(state): State<AppState>,
    session: Session,
    Path(influencer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AnyRole(DIRECTORY_ROLES)])
        .await?;

    let influencer = InfluencerService::new(&state.db, &state.app_url)
        .get(influencer_id)
        .await?;

    Ok((StatusCode::OK, Json(influencer.into_dto())))
}

/// Get influencer profiles for review, in any status.
///
/// # Access Control
/// - `Admin` - Only admins review influencers
#[utoipa::path(
    get,
    path = "/api/admin/influencers",
    tag = INFLUENCER_TAG,
    params(ProfileFilterParam, PaginationParam),
    responses(
        (status = 200, description = "Page of influencers", body = PaginatedDto<InfluencerDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_influencers_for_review(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<ProfileFilterParam>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let influencers = InfluencerService::new(&state.db, &state.app_url)
        .get_paginated(filter.status, params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(influencers.into_dto(Influencer::into_dto))))
}

#[utoipa::path(
    post,
    path = "/api/admin/influencers/{influencer_id}/approve",
    tag = INFLUENCER_TAG,
    params(
        ("influencer_id" = i32, Path, description = "Influencer ID")
    ),
    responses(
        (status = 200, description = "Influencer approved", body = InfluencerDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Influencer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_influencer(
    State(state): State<AppState>,
    session: Session,
    Path(influencer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let influencer = InfluencerService::new(&state.db, &state.app_url)
        .review(influencer_id, true, None)
        .await?;

    Ok((StatusCode::OK, Json(influencer.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/admin/influencers/{influencer_id}/reject",
    tag = INFLUENCER_TAG,
    params(
        ("influencer_id" = i32, Path, description = "Influencer ID")
    ),
    request_body = ReviewProfileDto,
    responses(
        (status = 200, description = "Influencer rejected", body = InfluencerDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Influencer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_influencer(
    State(state): State<AppState>,
    session: Session,
    Path(influencer_id): Path<i32>,
    Json(payload): Json<ReviewProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let influencer = InfluencerService::new(&state.db, &state.app_url)
        .review(influencer_id, false, payload.reason)
        .await?;

    Ok((StatusCode::OK, Json(influencer.into_dto())))
}
