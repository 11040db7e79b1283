//! In-app notifications and the fan-out helper used by every workflow.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{notification::NotificationRepository, user::UserRepository},
    error::AppError,
    model::{
        notification::{Notification, NotificationContent},
        pagination::Paginated,
    },
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
    app_url: &'a str,
}

impl<'a> NotificationService<'a> {
    /// Creates a new NotificationService.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `app_url` - Base URL prefixed to notification links
    pub fn new(db: &'a DatabaseConnection, app_url: &'a str) -> Self {
        Self { db, app_url }
    }

    fn absolute(&self, content: &NotificationContent) -> NotificationContent {
        let mut content = content.clone();
        if let Some(link) = content.link.take() {
            content.link = Some(format!("{}{}", self.app_url, link));
        }
        content
    }

    /// Sends one notification, failing when it can't be stored.
    pub async fn notify(
        &self,
        user_id: i32,
        content: &NotificationContent,
    ) -> Result<Notification, AppError> {
        let repo = NotificationRepository::new(self.db);

        Ok(repo.create(user_id, &self.absolute(content)).await?)
    }

    /// Creates one notification per recipient.
    ///
    /// A recipient whose row can't be stored is logged and skipped so one bad row
    /// doesn't stop the rest.
    ///
    /// # Arguments
    /// - `recipients` - User IDs to notify, in order
    /// - `content` - Notification sent to each of them
    ///
    /// # Returns
    /// - `usize` - Number of notifications created
    pub async fn fan_out(&self, recipients: &[i32], content: &NotificationContent) -> usize {
        let repo = NotificationRepository::new(self.db);
        let content = self.absolute(content);

        let mut created = 0;
        for &user_id in recipients {
            match repo.create(user_id, &content).await {
                Ok(_) => created += 1,
                Err(e) => {
                    tracing::warn!(
                        "Failed to create {} notification for user {}: {}",
                        content.kind.as_str(),
                        user_id,
                        e
                    );
                }
            }
        }

        tracing::info!(
            "Sent {} notification to {}/{} recipients",
            content.kind.as_str(),
            created,
            recipients.len()
        );

        created
    }

    /// Notifies every admin.
    pub async fn notify_admins(&self, content: &NotificationContent) -> Result<usize, AppError> {
        let admins = UserRepository::new(self.db).get_admin_ids().await?;

        Ok(self.fan_out(&admins, content).await)
    }

    /// Gets the user's notifications, newest first.
    pub async fn list(
        &self,
        user_id: i32,
        unread_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Notification>, AppError> {
        let repo = NotificationRepository::new(self.db);

        let (items, total) = repo
            .get_paginated(user_id, unread_only, page, per_page)
            .await?;

        Ok(Paginated::new(items, total, page, per_page))
    }

    pub async fn unread_count(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .count_unread(user_id)
            .await?)
    }

    /// Marks one of the user's notifications read.
    ///
    /// # Returns
    /// - `Ok(Notification)` - The notification, now read
    /// - `Err(AppError::NotFound)` - No such notification for this user
    pub async fn mark_read(&self, user_id: i32, id: i32) -> Result<Notification, AppError> {
        NotificationRepository::new(self.db)
            .mark_read(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Notification {} not found", id)))
    }

    /// Marks all of the user's notifications read, returning how many changed.
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .mark_all_read(user_id)
            .await?)
    }
}
