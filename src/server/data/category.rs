//! Category repository.
//!
//! Categories classify campaigns and influencers. Deleting a category detaches it from
//! both before the row is removed.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::category::{Category, SaveCategoryParam};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: SaveCategoryParam) -> Result<Category, DbErr> {
        let entity = entity::category::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        Ok(entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?
            .map(Category::from_entity))
    }

    /// Gets every category ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        Ok(entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Category::from_entity)
            .collect())
    }

    /// Checks whether another category already uses the name, ignoring case.
    ///
    /// # Arguments
    /// - `name` - Candidate name
    /// - `exclude_id` - Category being renamed, which may keep its own name
    ///
    /// # Returns
    /// - `Ok(true)` - The name is taken by a different category
    /// - `Ok(false)` - The name is free
    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let wanted = name.to_lowercase();
        let categories = entity::prelude::Category::find().all(self.db).await?;

        Ok(categories
            .iter()
            .any(|c| Some(c.id) != exclude_id && c.name.to_lowercase() == wanted))
    }

    pub async fn update(
        &self,
        id: i32,
        param: SaveCategoryParam,
    ) -> Result<Option<Category>, DbErr> {
        let Some(entity) = entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(param.name);
        active.description = ActiveValue::Set(param.description);

        Ok(Some(Category::from_entity(active.update(self.db).await?)))
    }

    /// Deletes a category after clearing it from campaigns and influencers.
    ///
    /// # Returns
    /// - `Ok(true)` - Category deleted
    /// - `Ok(false)` - No category with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::Campaign::update_many()
            .col_expr(
                entity::campaign::Column::CategoryId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::campaign::Column::CategoryId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Influencer::update_many()
            .col_expr(
                entity::influencer::Column::CategoryId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::influencer::Column::CategoryId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
