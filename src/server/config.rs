use crate::server::{
    error::{config::ConfigError, AppError},
    model::platform::PlatformKind,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// OAuth application credentials for one platform.
#[derive(Clone, Debug)]
pub struct PlatformCredentials {
    pub client_id: String,
    pub client_secret: String,
}

pub struct Config {
    pub database_url: String,
    /// Base URL of the web application, without a trailing slash.
    pub app_url: String,
    pub bind_addr: String,

    pub instagram: Option<PlatformCredentials>,
    pub facebook: Option<PlatformCredentials>,
    pub tiktok: Option<PlatformCredentials>,
    pub youtube: Option<PlatformCredentials>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let app_url = required("APP_URL")?;
        url::Url::parse(&app_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_url: app_url.trim_end_matches('/').to_string(),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            instagram: credentials("INSTAGRAM_CLIENT_ID", "INSTAGRAM_CLIENT_SECRET"),
            facebook: credentials("FACEBOOK_CLIENT_ID", "FACEBOOK_CLIENT_SECRET"),
            tiktok: credentials("TIKTOK_CLIENT_KEY", "TIKTOK_CLIENT_SECRET"),
            youtube: credentials("YOUTUBE_CLIENT_ID", "YOUTUBE_CLIENT_SECRET"),
        })
    }

    /// Credentials for the platform, `None` when the platform isn't configured.
    pub fn credentials(&self, kind: PlatformKind) -> Option<&PlatformCredentials> {
        match kind {
            PlatformKind::Instagram => self.instagram.as_ref(),
            PlatformKind::Facebook => self.facebook.as_ref(),
            PlatformKind::TikTok => self.tiktok.as_ref(),
            PlatformKind::YouTube => self.youtube.as_ref(),
        }
    }

    /// Where the platform sends the user back after authorization.
    pub fn redirect_url(&self, kind: PlatformKind) -> String {
        format!("{}/api/oauth/{}/callback", self.app_url, kind.slug())
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn credentials(id_var: &str, secret_var: &str) -> Option<PlatformCredentials> {
    let client_id = std::env::var(id_var).ok().filter(|v| !v.is_empty())?;
    let client_secret = std::env::var(secret_var).ok().filter(|v| !v.is_empty())?;

    Some(PlatformCredentials {
        client_id,
        client_secret,
    })
}
