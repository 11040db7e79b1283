//! HTTP backend for campaignhub.
//!
//! Requests pass through four layers, each only talking to the one below it:
//!
//! - `controller/` - Axum handlers: access checks through `AuthGuard`, DTO conversion
//! - `service/` - Workflow rules, status transitions and notification fan-out
//! - `data/` - Repositories owning every SeaORM query, returning domain models
//! - `model/` - Domain models and the parameter types services accept
//!
//! Cross-cutting pieces:
//!
//! - `error/` - `AppError` and its mapping onto HTTP status codes
//! - `middleware/` - Permission guard and typed session access
//! - `config` / `startup` / `state` - Environment configuration, database, session
//!   store, HTTP and OAuth clients, and the state shared by handlers
//! - `router` - Route table, CORS, tracing and the OpenAPI document
//! - `scheduler/` - Campaign expiry sweep and expired session cleanup
//! - `util/` - Password hashing

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
