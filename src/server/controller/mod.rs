//! HTTP handlers.
//!
//! Controllers check access with [`AuthGuard`](super::middleware::auth::AuthGuard),
//! convert request DTOs into service parameters and turn domain models back into
//! response DTOs. Business rules live in the service layer.

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
