//! Social platforms and the deliverable services offered on them.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{platform::PlatformRepository, service_item::ServiceItemRepository},
    error::AppError,
    model::{
        platform::{CreatePlatformParam, Platform, PlatformKind, UpdatePlatformParam},
        service_item::{SaveServiceItemParam, ServiceItem},
    },
};

pub struct PlatformService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlatformService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets platforms ordered by name; inactive ones only when requested.
    pub async fn get_all(&self, include_inactive: bool) -> Result<Vec<Platform>, AppError> {
        Ok(PlatformRepository::new(self.db)
            .get_all(include_inactive)
            .await?)
    }

    /// Creates a platform.
    ///
    /// # Returns
    /// - `Ok(Platform)` - The new platform
    /// - `Err(AppError::BadRequest)` - Empty name or a slug outside the supported set
    /// - `Err(AppError::Conflict)` - The slug is already used
    pub async fn create(&self, param: CreatePlatformParam) -> Result<Platform, AppError> {
        let name = param.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Platform name is required".to_string()));
        }

        let slug = param.slug.trim().to_lowercase();
        if slug.parse::<PlatformKind>().is_err() {
            return Err(AppError::BadRequest(format!(
                "Unsupported platform '{}'",
                slug
            )));
        }

        let repo = PlatformRepository::new(self.db);
        if repo.find_by_slug(&slug).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Platform '{}' already exists",
                slug
            )));
        }

        Ok(repo
            .create(CreatePlatformParam {
                name,
                slug,
                active: param.active,
            })
            .await?)
    }

    pub async fn update(&self, id: i32, param: UpdatePlatformParam) -> Result<Platform, AppError> {
        let name = param.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Platform name is required".to_string()));
        }

        PlatformRepository::new(self.db)
            .update(
                id,
                UpdatePlatformParam {
                    name,
                    active: param.active,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Platform {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !PlatformRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Platform {} not found", id)));
        }

        Ok(())
    }
}

pub struct ServiceItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServiceItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the services offered on a platform.
    pub async fn get_by_platform(&self, platform_id: i32) -> Result<Vec<ServiceItem>, AppError> {
        self.require_platform(platform_id).await?;

        Ok(ServiceItemRepository::new(self.db)
            .get_by_platform(platform_id)
            .await?)
    }

    pub async fn create(
        &self,
        platform_id: i32,
        param: SaveServiceItemParam,
    ) -> Result<ServiceItem, AppError> {
        validate(&param)?;
        self.require_platform(platform_id).await?;

        Ok(ServiceItemRepository::new(self.db)
            .create(platform_id, param)
            .await?)
    }

    pub async fn update(&self, id: i32, param: SaveServiceItemParam) -> Result<ServiceItem, AppError> {
        validate(&param)?;

        ServiceItemRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Service {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ServiceItemRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Service {} not found", id)));
        }

        Ok(())
    }

    async fn require_platform(&self, platform_id: i32) -> Result<(), AppError> {
        PlatformRepository::new(self.db)
            .find_by_id(platform_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Platform {} not found", platform_id)))?;

        Ok(())
    }
}

fn validate(param: &SaveServiceItemParam) -> Result<(), AppError> {
    if param.name.is_empty() {
        return Err(AppError::BadRequest("Service name is required".to_string()));
    }

    Ok(())
}
