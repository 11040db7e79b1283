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
        brand::{BrandDto, BrandProfileDto, ProfileFilterParam, ReviewProfileDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::brand::{Brand, SaveBrandParam},
        service::brand::BrandService,
        state::AppState,
    },
};

/// Tag for grouping brand endpoints in OpenAPI documentation
pub static BRAND_TAG: &str = "brand";

/// Submit the brand profile for review.
///
/// A brand user creates exactly one profile. It starts out PENDING and every admin
/// is notified.
///
/// # Access Control
/// - `Brand` - Only brand users have a brand profile
///
/// # Returns
/// - `201 Created` - Profile submitted
/// - `400 Bad Request` - Missing name
/// - `409 Conflict` - The user already has a profile
#[utoipa::path(
    post,
    path = "/api/brand/profile",
    tag = BRAND_TAG,
    request_body = BrandProfileDto,
    responses(
        (status = 201, description = "Profile submitted", body = BrandDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a brand user", body = ErrorDto),
        (status = 409, description = "Profile already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_brand_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BrandProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Brand])
        .await?;

    let brand = BrandService::new(&state.db, &state.app_url)
        .create(user.id, SaveBrandParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(brand.into_dto())))
}

/// Get the current user's brand profile.
#[utoipa::path(
    get,
    path = "/api/brand/profile",
    tag = BRAND_TAG,
    responses(
        (status = 200, description = "Brand profile", body = BrandDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a brand user", body = ErrorDto),
        (status = 404, description = "No profile yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_brand_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Brand])
        .await?;

    let brand = BrandService::new(&state.db, &state.app_url)
        .get_own(user.id)
        .await?;

    Ok((StatusCode::OK, Json(brand.into_dto())))
}

/// Update the current user's brand profile.
///
/// Editing a rejected profile sends it back for review.
#[utoipa::path(
    put,
    path = "/api/brand/profile",
    tag = BRAND_TAG,
    request_body = BrandProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = BrandDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a brand user", body = ErrorDto),
        (status = 404, description = "No profile yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_brand_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BrandProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Brand])
        .await?;

    let brand = BrandService::new(&state.db, &state.app_url)
        .update_own(user.id, SaveBrandParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(brand.into_dto())))
}

/// Get brand profiles for review.
///
/// # Access Control
/// - `Admin` - Only admins review brands
///
/// # Arguments
/// - `filter` - Optional onboarding status to list
/// - `params` - Pagination parameters (page and entries)
#[utoipa::path(
    get,
    path = "/api/admin/brands",
    tag = BRAND_TAG,
    params(ProfileFilterParam, PaginationParam),
    responses(
        (status = 200, description = "Page of brands", body = PaginatedDto<BrandDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_brands(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<ProfileFilterParam>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let brands = BrandService::new(&state.db, &state.app_url)
        .get_paginated(filter.status, params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(brands.into_dto(Brand::into_dto))))
}

/// Approve a brand profile. The brand user is notified.
#[utoipa::path(
    post,
    path = "/api/admin/brands/{brand_id}/approve",
    tag = BRAND_TAG,
    params(
        ("brand_id" = i32, Path, description = "Brand ID")
    ),
    responses(
        (status = 200, description = "Brand approved", body = BrandDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Brand not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_brand(
    State(state): State<AppState>,
    session: Session,
    Path(brand_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let brand = BrandService::new(&state.db, &state.app_url)
        .review(brand_id, true, None)
        .await?;

    Ok((StatusCode::OK, Json(brand.into_dto())))
}

/// Reject a brand profile, optionally with a reason shown to the brand user.
#[utoipa::path(
    post,
    path = "/api/admin/brands/{brand_id}/reject",
    tag = BRAND_TAG,
    params(
        ("brand_id" = i32, Path, description = "Brand ID")
    ),
    request_body = ReviewProfileDto,
    responses(
        (status = 200, description = "Brand rejected", body = BrandDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Brand not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_brand(
    State(state): State<AppState>,
    session: Session,
    Path(brand_id): Path<i32>,
    Json(payload): Json<ReviewProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let brand = BrandService::new(&state.db, &state.app_url)
        .review(brand_id, false, payload.reason)
        .await?;

    Ok((StatusCode::OK, Json(brand.into_dto())))
}
