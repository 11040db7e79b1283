//! API data transfer objects.
//!
//! Request and response bodies exchanged with the client, plus the role and status
//! enums shared between the API surface and the server's domain models. Every type
//! derives `ToSchema` so it appears in the generated OpenAPI document.

pub mod api;
pub mod brand;
pub mod campaign;
pub mod category;
pub mod influencer;
pub mod invitation;
pub mod metrics;
pub mod mou;
pub mod notification;
pub mod platform;
pub mod status;
pub mod user;
