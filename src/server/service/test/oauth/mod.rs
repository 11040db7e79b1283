use crate::server::{
    config::{Config, PlatformCredentials},
    error::AppError,
    model::platform::PlatformKind,
    service::oauth::PlatformConnectService,
    startup::setup_oauth_clients,
    state::OAuthClients,
};
use test_utils::{builder::TestBuilder, factory};

mod authorize;
mod callback_state;

/// OAuth clients with only TikTok and YouTube configured.
fn oauth_clients() -> OAuthClients {
    let credentials = |id: &str| {
        Some(PlatformCredentials {
            client_id: id.to_string(),
            client_secret: "secret".to_string(),
        })
    };

    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        app_url: "http://localhost:8080".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        instagram: None,
        facebook: None,
        tiktok: credentials("tiktok-key"),
        youtube: credentials("youtube-id"),
    };

    setup_oauth_clients(&config).unwrap()
}
