mod auth;
mod campaign;
mod metrics;
mod oauth;
mod profile;
mod user;

/// Base URL the services prefix to notification links in tests.
const APP_URL: &str = "http://localhost:8080";
