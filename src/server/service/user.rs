use sea_orm::DatabaseConnection;

use crate::{
    model::status::UserRole,
    server::{
        data::user::UserRepository,
        error::AppError,
        model::{pagination::Paginated, user::User},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user by ID.
    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Gets all users ordered by name.
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<Paginated<User>, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(Paginated::new(users, total, page, per_page))
    }

    pub async fn update_role(&self, id: i32, role: UserRole) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .update_role(id, role)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

        tracing::info!("Changed role of user {} to {}", id, role);

        Ok(user)
    }

    /// Deletes a user account.
    ///
    /// # Arguments
    /// - `actor_id` - Admin performing the deletion
    /// - `id` - Account to delete
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted
    /// - `Err(AppError::BadRequest)` - Admin tried to delete their own account
    /// - `Err(AppError::NotFound)` - No such user
    pub async fn delete(&self, actor_id: i32, id: i32) -> Result<(), AppError> {
        if actor_id == id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        tracing::info!("User {} deleted by admin {}", id, actor_id);

        Ok(())
    }
}
