use sea_orm::DatabaseConnection;

use crate::server::{
    data::category::CategoryRepository,
    error::AppError,
    model::category::{Category, SaveCategoryParam},
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).get_all().await?)
    }

    /// Creates a category.
    ///
    /// # Returns
    /// - `Ok(Category)` - The new category
    /// - `Err(AppError::BadRequest)` - Empty name
    /// - `Err(AppError::Conflict)` - Another category has the same name, ignoring case
    pub async fn create(&self, param: SaveCategoryParam) -> Result<Category, AppError> {
        self.check_name(&param.name, None).await?;

        Ok(CategoryRepository::new(self.db).create(param).await?)
    }

    pub async fn update(&self, id: i32, param: SaveCategoryParam) -> Result<Category, AppError> {
        self.check_name(&param.name, Some(id)).await?;

        CategoryRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    /// Deletes a category, clearing it from campaigns and influencers.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CategoryRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }

        Ok(())
    }

    async fn check_name(&self, name: &str, exclude_id: Option<i32>) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::BadRequest("Category name is required".to_string()));
        }

        if CategoryRepository::new(self.db)
            .name_taken(name, exclude_id)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "A category named '{}' already exists",
                name
            )));
        }

        Ok(())
    }
}
