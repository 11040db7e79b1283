//! Domain models and operation-specific parameter types.
//!
//! Repositories convert SeaORM entity models into these types at the data layer
//! boundary; services and controllers work only with them. Each model converts into
//! its API DTO with `into_dto`.

pub mod brand;
pub mod campaign;
pub mod category;
pub mod influencer;
pub mod invitation;
pub mod metrics;
pub mod mou;
pub mod notification;
pub mod pagination;
pub mod platform;
pub mod service_item;
pub mod user;

use crate::model::status::UnknownVariant;

/// Stored enum strings that fail to parse surface as database type errors.
impl From<UnknownVariant> for sea_orm::DbErr {
    fn from(err: UnknownVariant) -> Self {
        sea_orm::DbErr::Type(err.to_string())
    }
}
