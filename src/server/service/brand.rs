//! Brand onboarding: one profile per brand user, reviewed by an admin.

use sea_orm::DatabaseConnection;

use crate::{
    model::status::ProfileStatus,
    server::{
        data::brand::BrandRepository,
        error::AppError,
        model::{
            brand::{Brand, SaveBrandParam},
            notification::{NotificationContent, NotificationKind},
            pagination::Paginated,
        },
        service::notification::NotificationService,
    },
};

pub struct BrandService<'a> {
    db: &'a DatabaseConnection,
    app_url: &'a str,
}

impl<'a> BrandService<'a> {
    pub fn new(db: &'a DatabaseConnection, app_url: &'a str) -> Self {
        Self { db, app_url }
    }

    /// Creates the user's brand profile with status PENDING and notifies admins.
    ///
    /// # Returns
    /// - `Ok(Brand)` - The new profile
    /// - `Err(AppError::BadRequest)` - Empty name
    /// - `Err(AppError::Conflict)` - The user already has a brand profile
    pub async fn create(&self, user_id: i32, param: SaveBrandParam) -> Result<Brand, AppError> {
        validate(&param)?;

        let repo = BrandRepository::new(self.db);
        if repo.find_by_user_id(user_id).await?.is_some() {
            return Err(AppError::Conflict(
                "You already have a brand profile".to_string(),
            ));
        }

        let brand = repo.create(user_id, param).await?;

        tracing::info!("Brand {} submitted by user {}", brand.id, user_id);

        NotificationService::new(self.db, self.app_url)
            .notify_admins(
                &NotificationContent::new(
                    NotificationKind::ProfileSubmitted,
                    "New brand profile",
                    format!("{} submitted a brand profile for review", brand.name),
                )
                .link("/admin/brands"),
            )
            .await?;

        Ok(brand)
    }

    /// Gets the profile owned by the user.
    pub async fn get_own(&self, user_id: i32) -> Result<Brand, AppError> {
        BrandRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Brand profile not found".to_string()))
    }

    /// Updates the user's own profile.
    ///
    /// A rejected profile goes back to PENDING and admins are told it was resubmitted.
    pub async fn update_own(&self, user_id: i32, param: SaveBrandParam) -> Result<Brand, AppError> {
        validate(&param)?;

        let brand = self.get_own(user_id).await?;
        let resubmitted = brand.status == ProfileStatus::Rejected;
        let status = if resubmitted {
            ProfileStatus::Pending
        } else {
            brand.status
        };

        let brand = BrandRepository::new(self.db)
            .update(brand.id, param, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Brand profile not found".to_string()))?;

        if resubmitted {
            tracing::info!("Brand {} resubmitted by user {}", brand.id, user_id);

            NotificationService::new(self.db, self.app_url)
                .notify_admins(
                    &NotificationContent::new(
                        NotificationKind::ProfileSubmitted,
                        "Brand profile resubmitted",
                        format!("{} resubmitted their brand profile for review", brand.name),
                    )
                    .link("/admin/brands"),
                )
                .await?;
        }

        Ok(brand)
    }

    pub async fn get_paginated(
        &self,
        status: Option<ProfileStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Brand>, AppError> {
        let (brands, total) = BrandRepository::new(self.db)
            .get_paginated(status, page, per_page)
            .await?;

        Ok(Paginated::new(brands, total, page, per_page))
    }

    /// Approves or rejects a brand profile and notifies its owner.
    ///
    /// # Arguments
    /// - `id` - Brand ID
    /// - `approve` - `true` to approve, `false` to reject
    /// - `reason` - Optional note included in the notification
    pub async fn review(
        &self,
        id: i32,
        approve: bool,
        reason: Option<String>,
    ) -> Result<Brand, AppError> {
        let status = if approve {
            ProfileStatus::Approved
        } else {
            ProfileStatus::Rejected
        };

        let brand = BrandRepository::new(self.db)
            .set_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Brand {} not found", id)))?;

        tracing::info!("Brand {} reviewed: {}", brand.id, status);

        let mut message = format!("Your brand profile {} was {}", brand.name, status.as_str().to_lowercase());
        if let Some(reason) = reason.filter(|r| !r.trim().is_empty()) {
            message.push_str(&format!(": {}", reason.trim()));
        }

        NotificationService::new(self.db, self.app_url)
            .notify(
                brand.user_id,
                &NotificationContent::new(
                    NotificationKind::ProfileReviewed,
                    "Brand profile reviewed",
                    message,
                )
                .link("/brand"),
            )
            .await?;

        Ok(brand)
    }
}

fn validate(param: &SaveBrandParam) -> Result<(), AppError> {
    if param.name.trim().is_empty() {
        return Err(AppError::BadRequest("Brand name is required".to_string()));
    }

    Ok(())
}
