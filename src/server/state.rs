//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for platform API requests
//! - OAuth2 clients for every configured social platform
//! - Admin code service for bootstrapping the first admin
//! - Application URL for generating links and redirects

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::{collections::HashMap, sync::Arc};

use super::{model::platform::PlatformKind, service::admin::code::AdminCodeService};

/// Type alias for an OAuth2 client with authorization and token endpoints configured.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// OAuth clients keyed by platform. Platforms without credentials are absent.
pub(crate) type OAuthClients = Arc<HashMap<PlatformKind, OAuthApp>>;

/// A configured OAuth application for one platform.
#[derive(Clone)]
pub struct OAuthApp {
    pub client: OAuth2Client,
    /// Client ID, needed by platforms that expect it under a different parameter name.
    pub client_id: String,
}

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `OAuthClients` is reference-counted
/// - `AdminCodeService` uses `Arc` for shared state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for making platform API requests.
    ///
    /// Configured without redirect following to prevent SSRF vulnerabilities.
    pub http_client: reqwest::Client,

    /// OAuth2 clients for the social platform connectors.
    pub oauth_clients: OAuthClients,

    /// Service for managing the one-time admin registration code.
    pub admin_code_service: AdminCodeService,

    /// Application base URL for generating links.
    pub app_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `oauth_clients` - OAuth2 clients for configured platforms
    /// - `admin_code_service` - Service for managing admin codes
    /// - `app_url` - Application base URL
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_clients: OAuthClients,
        admin_code_service: AdminCodeService,
        app_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_clients,
            admin_code_service,
            app_url,
        }
    }
}
