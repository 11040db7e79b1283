//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, ownership checks and the campaign status workflow
//! - **Orchestration**: Coordinating repository calls, notifications and platform APIs
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod admin;
pub mod auth;
pub mod brand;
pub mod campaign;
pub mod category;
pub mod influencer;
pub mod invitation;
pub mod metrics;
pub mod mou;
pub mod notification;
pub mod oauth;
pub mod platform;
pub mod user;

#[cfg(test)]
mod test;
