use crate::model::platform::{SaveServiceItemDto, ServiceItemDto};

/// A deliverable type offered on a platform, such as "Instagram Reel".
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceItem {
    pub id: i32,
    pub platform_id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl ServiceItem {
    pub fn into_dto(self) -> ServiceItemDto {
        ServiceItemDto {
            id: self.id,
            platform_id: self.platform_id,
            name: self.name,
            description: self.description,
        }
    }

    pub fn from_entity(entity: entity::service::Model) -> Self {
        Self {
            id: entity.id,
            platform_id: entity.platform_id,
            name: entity.name,
            description: entity.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveServiceItemParam {
    pub name: String,
    pub description: Option<String>,
}

impl SaveServiceItemParam {
    pub fn from_dto(dto: SaveServiceItemDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
        }
    }
}
