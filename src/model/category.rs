use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// Used for both creating and updating a category.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SaveCategoryDto {
    pub name: String,
    pub description: Option<String>,
}
