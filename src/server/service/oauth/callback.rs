use chrono::Utc;
use oauth2::{AuthorizationCode, TokenResponse};
use serde::de::DeserializeOwned;

use crate::{
    model::platform::OAuthCallbackParam,
    server::{
        data::platform_account::PlatformAccountRepository,
        error::{auth::AuthError, AppError},
        model::platform::{
            PlatformAccount, PlatformKind, PlatformProfile, UpsertPlatformAccountParam,
        },
        service::oauth::{
            provider::{
                provider_for, FacebookPagesResponse, InstagramPagesResponse, MissingAccount,
                TikTokUserResponse, YouTubeChannelsResponse,
            },
            PlatformConnectService,
        },
    },
};

/// What to do with a platform's redirect back to the callback.
#[derive(Debug, PartialEq)]
pub enum CallbackOutcome {
    /// The platform reported an error, usually the user refusing consent.
    Denied(String),
    /// Exchange this authorization code.
    Exchange(String),
}

/// Checks a callback against the state stored when the flow started.
///
/// A platform error wins over everything else, so a refused consent always
/// returns the user to their platforms page.
///
/// # Arguments
/// - `stored_state` - State taken from the session, `None` if no flow was started
/// - `params` - Query parameters the platform redirected with
///
/// # Returns
/// - `Ok(CallbackOutcome::Denied)` - The platform sent an `error` parameter
/// - `Ok(CallbackOutcome::Exchange)` - State matches and a code is present
/// - `Err(AuthError::CsrfValidationFailed)` - State missing on either side or not matching
/// - `Err(AppError::BadRequest)` - No authorization code
pub fn check_callback(
    stored_state: Option<String>,
    params: OAuthCallbackParam,
) -> Result<CallbackOutcome, AppError> {
    if let Some(error) = params.error {
        return Ok(CallbackOutcome::Denied(error));
    }

    match (stored_state, params.state) {
        (Some(stored), Some(received)) if stored == received => {}
        _ => return Err(AuthError::CsrfValidationFailed.into()),
    }

    params
        .code
        .map(CallbackOutcome::Exchange)
        .ok_or_else(|| AppError::BadRequest("Missing authorization code".to_string()))
}

impl<'a> PlatformConnectService<'a> {
    /// Completes a connection after the platform redirects back.
    ///
    /// Exchanges the authorization code, reads the account profile and stores it
    /// with its tokens. Reconnecting the same platform replaces the stored account.
    ///
    /// # Arguments
    /// - `kind` - Platform being connected
    /// - `influencer_id` - Influencer profile the account belongs to
    /// - `authorization_code` - Code returned by the platform
    ///
    /// # Returns
    /// - `Ok(PlatformAccount)` - The stored account
    /// - `Err(AppError::BadRequest)` - Platform not configured, inactive, or no account found
    /// - `Err(AuthError::TokenExchange)` - The platform refused the code
    /// - `Err(AppError::ReqwestErr)` - The profile request failed
    pub async fn callback(
        &self,
        kind: PlatformKind,
        influencer_id: i32,
        authorization_code: String,
    ) -> Result<PlatformAccount, AppError> {
        let app = self.app(kind)?;

        let platform = self.platform(kind).await?;
        if !platform.active {
            return Err(AppError::BadRequest(format!(
                "{} connections are disabled",
                kind
            )));
        }

        let mut request = app
            .client
            .exchange_code(AuthorizationCode::new(authorization_code));
        if kind == PlatformKind::TikTok {
            request = request.add_extra_param("client_key", app.client_id.as_str());
        }

        let token = request
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(format!("{}: {}", kind, e)))?;

        let access_token = token.access_token().secret().clone();
        let profile = self.fetch_profile(kind, &access_token).await?;

        let token_expires_at = token
            .expires_in()
            .and_then(|d| chrono::Duration::from_std(d).ok())
            .map(|d| Utc::now() + d);

        let account = PlatformAccountRepository::new(self.db)
            .upsert(UpsertPlatformAccountParam {
                influencer_id,
                platform_id: platform.id,
                profile,
                access_token,
                refresh_token: token.refresh_token().map(|t| t.secret().clone()),
                token_expires_at,
            })
            .await?;

        tracing::info!(
            "Influencer {} connected {} account {} ({} followers)",
            influencer_id,
            kind,
            account.username,
            account.followers_count
        );

        Ok(account)
    }

    /// Reads the connected account from the platform's API.
    async fn fetch_profile(
        &self,
        kind: PlatformKind,
        access_token: &str,
    ) -> Result<PlatformProfile, AppError> {
        let url = provider_for(kind).profile_url;

        let profile = match kind {
            PlatformKind::Instagram => self
                .get_json::<InstagramPagesResponse>(url, access_token)
                .await?
                .into_profile(),
            PlatformKind::Facebook => self
                .get_json::<FacebookPagesResponse>(url, access_token)
                .await?
                .into_profile(),
            PlatformKind::TikTok => self
                .get_json::<TikTokUserResponse>(url, access_token)
                .await?
                .into_profile(),
            PlatformKind::YouTube => self
                .get_json::<YouTubeChannelsResponse>(url, access_token)
                .await?
                .into_profile(),
        };

        profile.map_err(|MissingAccount(reason)| AppError::BadRequest(reason.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        access_token: &str,
    ) -> Result<T, AppError> {
        let response = self
            .http_client
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(response)
    }
}
