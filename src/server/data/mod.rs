//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod brand;
pub mod campaign;
pub mod category;
pub mod influencer;
pub mod invitation;
pub mod metrics;
pub mod mou;
pub mod notification;
pub mod platform;
pub mod platform_account;
pub mod service_item;
pub mod user;

#[cfg(test)]
mod test;
