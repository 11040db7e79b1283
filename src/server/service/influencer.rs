//! Influencer onboarding and the directory brands browse when inviting.

use sea_orm::DatabaseConnection;

use crate::{
    model::status::ProfileStatus,
    server::{
        data::{category::CategoryRepository, influencer::InfluencerRepository},
        error::AppError,
        model::{
            influencer::{Influencer, SaveInfluencerParam},
            notification::{NotificationContent, NotificationKind},
            pagination::Paginated,
        },
        service::notification::NotificationService,
    },
};

pub struct InfluencerService<'a> {
    db: &'a DatabaseConnection,
    app_url: &'a str,
}

impl<'a> InfluencerService<'a> {
    pub fn new(db: &'a DatabaseConnection, app_url: &'a str) -> Self {
        Self { db, app_url }
    }

    /// Creates the user's influencer profile with status PENDING and notifies admins.
    ///
    /// # Returns
    /// - `Ok(Influencer)` - The new profile
    /// - `Err(AppError::BadRequest)` - Empty display name or unknown category
    /// - `Err(AppError::Conflict)` - The user already has an influencer profile
    pub async fn create(
        &self,
        user_id: i32,
        param: SaveInfluencerParam,
    ) -> Result<Influencer, AppError> {
        self.validate(&param).await?;

        let repo = InfluencerRepository::new(self.db);
        if repo.find_by_user_id(user_id).await?.is_some() {
            return Err(AppError::Conflict(
                "You already have an influencer profile".to_string(),
            ));
        }

        let influencer = repo.create(user_id, param).await?;

        tracing::info!("Influencer {} submitted by user {}", influencer.id, user_id);

        NotificationService::new(self.db, self.app_url)
            .notify_admins(
                &NotificationContent::new(
                    NotificationKind::ProfileSubmitted,
                    "New influencer profile",
                    format!(
                        "{} submitted an influencer profile for review",
                        influencer.display_name
                    ),
                )
                .link("/admin/influencers"),
            )
            .await?;

        Ok(influencer)
    }

    pub async fn get_own(&self, user_id: i32) -> Result<Influencer, AppError> {
        InfluencerRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Influencer profile not found".to_string()))
    }

    /// Updates the user's own profile.
    ///
    /// A rejected profile goes back to PENDING and admins are told it was resubmitted.
    pub async fn update_own(
        &self,
        user_id: i32,
        param: SaveInfluencerParam,
    ) -> Result<Influencer, AppError> {
        self.validate(&param).await?;

        let influencer = self.get_own(user_id).await?;
        let resubmitted = influencer.status == ProfileStatus::Rejected;
        let status = if resubmitted {
            ProfileStatus::Pending
        } else {
            influencer.status
        };

        let influencer = InfluencerRepository::new(self.db)
            .update(influencer.id, param, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Influencer profile not found".to_string()))?;

        if resubmitted {
            tracing::info!("Influencer {} resubmitted by user {}", influencer.id, user_id);

            NotificationService::new(self.db, self.app_url)
                .notify_admins(
                    &NotificationContent::new(
                        NotificationKind::ProfileSubmitted,
                        "Influencer profile resubmitted",
                        format!(
                            "{} resubmitted their influencer profile for review",
                            influencer.display_name
                        ),
                    )
                    .link("/admin/influencers"),
                )
                .await?;
        }

        Ok(influencer)
    }

    /// Admin listing of influencer profiles with an optional status filter.
    pub async fn get_paginated(
        &self,
        status: Option<ProfileStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Influencer>, AppError> {
        let (influencers, total) = InfluencerRepository::new(self.db)
            .get_paginated(status, None, page, per_page)
            .await?;

        Ok(Paginated::new(influencers, total, page, per_page))
    }

    /// Approved influencers, optionally in one category.
    pub async fn browse(
        &self,
        category_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Influencer>, AppError> {
        let (influencers, total) = InfluencerRepository::new(self.db)
            .get_paginated(Some(ProfileStatus::Approved), category_id, page, per_page)
            .await?;

        Ok(Paginated::new(influencers, total, page, per_page))
    }

    /// Gets an influencer profile by ID.
    pub async fn get(&self, id: i32) -> Result<Influencer, AppError> {
        InfluencerRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Influencer {} not found", id)))
    }

    /// Approves or rejects an influencer profile and notifies its owner.
    pub async fn review(
        &self,
        id: i32,
        approve: bool,
        reason: Option<String>,
    ) -> Result<Influencer, AppError> {
        let status = if approve {
            ProfileStatus::Approved
        } else {
            ProfileStatus::Rejected
        };

        let influencer = InfluencerRepository::new(self.db)
            .set_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Influencer {} not found", id)))?;

        tracing::info!("Influencer {} reviewed: {}", influencer.id, status);

        let mut message = format!(
            "Your influencer profile was {}",
            status.as_str().to_lowercase()
        );
        if let Some(reason) = reason.filter(|r| !r.trim().is_empty()) {
            message.push_str(&format!(": {}", reason.trim()));
        }

        NotificationService::new(self.db, self.app_url)
            .notify(
                influencer.user_id,
                &NotificationContent::new(
                    NotificationKind::ProfileReviewed,
                    "Influencer profile reviewed",
                    message,
                )
                .link("/influencer"),
            )
            .await?;

        Ok(influencer)
    }

    async fn validate(&self, param: &SaveInfluencerParam) -> Result<(), AppError> {
        if param.display_name.is_empty() {
            return Err(AppError::BadRequest("Display name is required".to_string()));
        }

        if let Some(category_id) = param.category_id {
            if CategoryRepository::new(self.db)
                .find_by_id(category_id)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(format!(
                    "Category {} does not exist",
                    category_id
                )));
            }
        }

        Ok(())
    }
}
