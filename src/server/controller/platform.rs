use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        platform::{
            CreatePlatformDto, PlatformDto, PlatformListParam, SaveServiceItemDto,
            ServiceItemDto, UpdatePlatformDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            platform::{CreatePlatformParam, Platform, UpdatePlatformParam},
            service_item::{SaveServiceItemParam, ServiceItem},
        },
        service::platform::{PlatformService, ServiceItemService},
        state::AppState,
    },
};

/// Tag for grouping platform and service endpoints in OpenAPI documentation
pub static PLATFORM_TAG: &str = "platform";

/// Get platforms.
///
/// Only active platforms are returned unless an admin asks for all of them.
///
/// # Access Control
/// - Any logged-in user; `all=true` requires `Admin`
#[utoipa::path(
    get,
    path = "/api/platforms",
    tag = PLATFORM_TAG,
    params(PlatformListParam),
    responses(
        (status = 200, description = "Platforms", body = Vec<PlatformDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Inactive platforms requested by a non-admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_platforms(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PlatformListParam>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &session);
    if params.all {
        guard.require(&[Permission::Admin]).await?;
    } else {
        guard.require(&[]).await?;
    }

    let platforms = PlatformService::new(&state.db).get_all(params.all).await?;

    Ok((
        StatusCode::OK,
        Json(
            platforms
                .into_iter()
                .map(Platform::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Add a platform.
///
/// # Access Control
/// - `Admin` - Only admins can manage platforms
///
/// # Returns
/// - `201 Created` - Platform created
/// - `400 Bad Request` - Empty name or unsupported slug
/// - `409 Conflict` - Slug already in use
#[utoipa::path(
    post,
    path = "/api/admin/platforms",
    tag = PLATFORM_TAG,
    request_body = CreatePlatformDto,
    responses(
        (status = 201, description = "Platform created", body = PlatformDto),
        (status = 400, description = "Invalid platform data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_platform(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePlatformDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let platform = PlatformService::new(&state.db)
        .create(CreatePlatformParam {
            name: payload.name,
            slug: payload.slug,
            active: payload.active,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(platform.into_dto())))
}

/// Rename a platform or switch it on or off.
#[utoipa::path(
    put,
    path = "/api/admin/platforms/{platform_id}",
    tag = PLATFORM_TAG,
    params(
        ("platform_id" = i32, Path, description = "Platform ID")
    ),
    request_body = UpdatePlatformDto,
    responses(
        (status = 200, description = "Platform updated", body = PlatformDto),
        (status = 400, description = "Invalid platform data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Platform not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_platform(
    State(state): State<AppState>,
    session: Session,
    Path(platform_id): Path<i32>,
    Json(payload): Json<UpdatePlatformDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let platform = PlatformService::new(&state.db)
        .update(
            platform_id,
            UpdatePlatformParam {
                name: payload.name,
                active: payload.active,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(platform.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/platforms/{platform_id}",
    tag = PLATFORM_TAG,
    params(
        ("platform_id" = i32, Path, description = "Platform ID")
    ),
    responses(
        (status = 204, description = "Platform deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Platform not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_platform(
    State(state): State<AppState>,
    session: Session,
    Path(platform_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    PlatformService::new(&state.db).delete(platform_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the services offered on a platform.
///
/// # Access Control
/// - Any logged-in user
#[utoipa::path(
    get,
    path = "/api/platforms/{platform_id}/services",
    tag = PLATFORM_TAG,
    params(
        ("platform_id" = i32, Path, description = "Platform ID")
    ),
    responses(
        (status = 200, description = "Services on the platform", body = Vec<ServiceItemDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Platform not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_services(
    State(state): State<AppState>,
    session: Session,
    Path(platform_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let services = ServiceItemService::new(&state.db)
        .get_by_platform(platform_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            services
                .into_iter()
                .map(ServiceItem::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Add a service to a platform.
///
/// # Access Control
/// - `Admin` - Only admins can manage services
#[utoipa::path(
    post,
    path = "/api/admin/platforms/{platform_id}/services",
    tag = PLATFORM_TAG,
    params(
        ("platform_id" = i32, Path, description = "Platform ID")
    ),
    request_body = SaveServiceItemDto,
    responses(
        (status = 201, description = "Service created", body = ServiceItemDto),
        (status = 400, description = "Invalid service data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Platform not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_service(
    State(state): State<AppState>,
    session: Session,
    Path(platform_id): Path<i32>,
    Json(payload): Json<SaveServiceItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = ServiceItemService::new(&state.db)
        .create(platform_id, SaveServiceItemParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(service.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/services/{service_id}",
    tag = PLATFORM_TAG,
    params(
        ("service_id" = i32, Path, description = "Service ID")
    ),
    request_body = SaveServiceItemDto,
    responses(
        (status = 200, description = "Service updated", body = ServiceItemDto),
        (status = 400, description = "Invalid service data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_service(
    State(state): State<AppState>,
    session: Session,
    Path(service_id): Path<i32>,
    Json(payload): Json<SaveServiceItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = ServiceItemService::new(&state.db)
        .update(service_id, SaveServiceItemParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(service.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/services/{service_id}",
    tag = PLATFORM_TAG,
    params(
        ("service_id" = i32, Path, description = "Service ID")
    ),
    responses(
        (status = 204, description = "Service deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_service(
    State(state): State<AppState>,
    session: Session,
    Path(service_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ServiceItemService::new(&state.db).delete(service_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
