use crate::model::category::{CategoryDto, SaveCategoryDto};

/// A content niche used to classify influencers and campaigns.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl Category {
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }

    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveCategoryParam {
    pub name: String,
    pub description: Option<String>,
}

impl SaveCategoryParam {
    pub fn from_dto(dto: SaveCategoryDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
        }
    }
}
