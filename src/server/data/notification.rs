//! Notification repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::notification::{Notification, NotificationContent};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores an unread notification for one recipient.
    pub async fn create(
        &self,
        user_id: i32,
        content: &NotificationContent,
    ) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            kind: ActiveValue::Set(content.kind.as_str().to_string()),
            title: ActiveValue::Set(content.title.clone()),
            message: ActiveValue::Set(content.message.clone()),
            link: ActiveValue::Set(content.link.clone()),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Gets a user's notifications, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Recipient
    /// - `unread_only` - Skip notifications already read
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of notifications per page
    ///
    /// # Returns
    /// - `Ok((notifications, total))` - Notifications for the page and total matching count
    pub async fn get_paginated(
        &self,
        user_id: i32,
        unread_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Notification>, u64), DbErr> {
        let mut query = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id));
        if unread_only {
            query = query.filter(entity::notification::Column::Read.eq(false));
        }

        let paginator = query
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let notifications = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Notification::from_entity)
            .collect();

        Ok((notifications, total))
    }

    pub async fn count_unread(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::Read.eq(false))
            .count(self.db)
            .await
    }

    /// Marks one of the user's notifications read.
    ///
    /// # Returns
    /// - `Ok(Some(Notification))` - The updated notification
    /// - `Ok(None)` - No such notification for this user
    pub async fn mark_read(&self, id: i32, user_id: i32) -> Result<Option<Notification>, DbErr> {
        let Some(entity) = entity::prelude::Notification::find_by_id(id)
            .filter(entity::notification::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.read = ActiveValue::Set(true);

        Ok(Some(Notification::from_entity(active.update(self.db).await?)))
    }

    /// Marks all of the user's notifications read, returning how many changed.
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::Read, Expr::value(true))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::Read.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
