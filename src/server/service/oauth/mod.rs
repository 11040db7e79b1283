//! OAuth2 connections between influencers and their social platform accounts.
//!
//! Each supported platform is described by a [`provider::Provider`]. Connecting runs
//! the authorization code flow: the influencer is sent to the platform with a random
//! CSRF state, the platform redirects back with a code, the code is exchanged for a
//! token and the account profile is fetched and stored.

use oauth2::{CsrfToken, Scope};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;
use url::Url;

use crate::server::{
    data::{platform::PlatformRepository, platform_account::PlatformAccountRepository},
    error::AppError,
    model::platform::{Platform, PlatformAccount, PlatformKind},
    state::OAuthApp,
};

pub mod callback;
pub mod provider;

use provider::provider_for;

pub struct PlatformConnectService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth_clients: &'a HashMap<PlatformKind, OAuthApp>,
}

impl<'a> PlatformConnectService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_clients: &'a HashMap<PlatformKind, OAuthApp>,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_clients,
        }
    }

    /// The configured OAuth application for a platform.
    ///
    /// # Returns
    /// - `Ok(&OAuthApp)` - Credentials are configured
    /// - `Err(AppError::BadRequest)` - The platform has no credentials
    fn app(&self, kind: PlatformKind) -> Result<&OAuthApp, AppError> {
        self.oauth_clients
            .get(&kind)
            .ok_or_else(|| AppError::BadRequest("platform not configured".to_string()))
    }

    /// Builds the URL sending the user to the platform's consent screen.
    ///
    /// # Returns
    /// - `Ok((Url, CsrfToken))` - Authorization URL and the state to keep in the session
    /// - `Err(AppError::BadRequest)` - The platform isn't configured
    pub fn authorize_url(&self, kind: PlatformKind) -> Result<(Url, CsrfToken), AppError> {
        let app = self.app(kind)?;
        let provider = provider_for(kind);

        let mut request = app.client.authorize_url(CsrfToken::new_random);
        for scope in provider.scopes {
            request = request.add_scope(Scope::new(scope.to_string()));
        }
        for (name, value) in provider.extra_params {
            request = request.add_extra_param(*name, *value);
        }
        if kind == PlatformKind::TikTok {
            request = request.add_extra_param("client_key", app.client_id.as_str());
        }

        Ok(request.url())
    }

    /// Gets the influencer's connected accounts. Tokens are never included.
    pub async fn accounts(&self, influencer_id: i32) -> Result<Vec<PlatformAccount>, AppError> {
        Ok(PlatformAccountRepository::new(self.db)
            .get_by_influencer(influencer_id)
            .await?)
    }

    /// Removes the influencer's account on a platform.
    ///
    /// # Returns
    /// - `Ok(())` - Account removed
    /// - `Err(AppError::NotFound)` - No account connected on that platform
    pub async fn disconnect(&self, influencer_id: i32, kind: PlatformKind) -> Result<(), AppError> {
        let platform = self.platform(kind).await?;

        if !PlatformAccountRepository::new(self.db)
            .delete(influencer_id, platform.id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "No {} account connected",
                kind
            )));
        }

        tracing::info!("Influencer {} disconnected {}", influencer_id, kind);

        Ok(())
    }

    async fn platform(&self, kind: PlatformKind) -> Result<Platform, AppError> {
        PlatformRepository::new(self.db)
            .find_by_slug(kind.slug())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Platform {} not found", kind.slug())))
    }
}
