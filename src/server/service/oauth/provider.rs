//! Static descriptions of the supported OAuth providers and their profile responses.

use serde::Deserialize;

use crate::server::model::platform::{PlatformKind, PlatformProfile};

/// Endpoints and parameters for one platform's authorization code flow.
#[derive(Debug, Clone, Copy)]
pub struct Provider {
    pub kind: PlatformKind,
    pub auth_url: &'static str,
    pub token_url: &'static str,
    pub scopes: &'static [&'static str],
    /// Additional query parameters appended to the authorization URL.
    pub extra_params: &'static [(&'static str, &'static str)],
    /// Endpoint returning the connected account, called with the access token.
    pub profile_url: &'static str,
}

pub fn provider_for(kind: PlatformKind) -> Provider {
    match kind {
        PlatformKind::Instagram => Provider {
            kind,
            auth_url: "https://www.facebook.com/v19.0/dialog/oauth",
            token_url: "https://graph.facebook.com/v19.0/oauth/access_token",
            scopes: &["instagram_basic", "pages_show_list"],
            extra_params: &[],
            profile_url: "https://graph.facebook.com/v19.0/me/accounts?fields=instagram_business_account{id,username,followers_count}",
        },
        PlatformKind::Facebook => Provider {
            kind,
            auth_url: "https://www.facebook.com/v19.0/dialog/oauth",
            token_url: "https://graph.facebook.com/v19.0/oauth/access_token",
            scopes: &["public_profile", "pages_show_list", "pages_read_engagement"],
            extra_params: &[],
            profile_url: "https://graph.facebook.com/v19.0/me/accounts?fields=id,name,followers_count",
        },
        // TikTok separates scopes with commas rather than spaces
        PlatformKind::TikTok => Provider {
            kind,
            auth_url: "https://www.tiktok.com/v2/auth/authorize/",
            token_url: "https://open.tiktokapis.com/v2/oauth/token/",
            scopes: &["user.info.basic,user.info.stats"],
            extra_params: &[],
            profile_url: "https://open.tiktokapis.com/v2/user/info/?fields=open_id,display_name,follower_count",
        },
        PlatformKind::YouTube => Provider {
            kind,
            auth_url: "https://accounts.google.com/o/oauth2/v2/auth",
            token_url: "https://oauth2.googleapis.com/token",
            scopes: &["https://www.googleapis.com/auth/youtube.readonly"],
            extra_params: &[("access_type", "offline"), ("prompt", "consent")],
            profile_url: "https://www.googleapis.com/youtube/v3/channels?part=snippet,statistics&mine=true",
        },
    }
}

/// Failure to read an account out of a profile response.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingAccount(pub &'static str);

// Instagram business accounts are reached through the Facebook pages they are linked to.
#[derive(Deserialize, Debug)]
pub struct InstagramPagesResponse {
    #[serde(default)]
    data: Vec<InstagramPage>,
}

#[derive(Deserialize, Debug)]
struct InstagramPage {
    instagram_business_account: Option<InstagramBusinessAccount>,
}

#[derive(Deserialize, Debug)]
struct InstagramBusinessAccount {
    id: String,
    username: String,
    #[serde(default)]
    followers_count: i64,
}

impl InstagramPagesResponse {
    /// Uses the first page with a linked Instagram business account.
    pub fn into_profile(self) -> Result<PlatformProfile, MissingAccount> {
        let account = self
            .data
            .into_iter()
            .find_map(|page| page.instagram_business_account)
            .ok_or(MissingAccount(
                "No Instagram business account is linked to your Facebook pages",
            ))?;

        Ok(PlatformProfile {
            external_id: account.id,
            username: account.username,
            followers_count: account.followers_count,
        })
    }
}

#[derive(Deserialize, Debug)]
pub struct FacebookPagesResponse {
    #[serde(default)]
    data: Vec<FacebookPage>,
}

#[derive(Deserialize, Debug)]
struct FacebookPage {
    id: String,
    name: String,
    #[serde(default)]
    followers_count: i64,
}

impl FacebookPagesResponse {
    pub fn into_profile(self) -> Result<PlatformProfile, MissingAccount> {
        let page = self
            .data
            .into_iter()
            .next()
            .ok_or(MissingAccount("No Facebook page is managed by this account"))?;

        Ok(PlatformProfile {
            external_id: page.id,
            username: page.name,
            followers_count: page.followers_count,
        })
    }
}

#[derive(Deserialize, Debug)]
pub struct TikTokUserResponse {
    data: Option<TikTokUserData>,
}

#[derive(Deserialize, Debug)]
struct TikTokUserData {
    user: Option<TikTokUser>,
}

#[derive(Deserialize, Debug)]
struct TikTokUser {
    open_id: String,
    display_name: String,
    #[serde(default)]
    follower_count: i64,
}

impl TikTokUserResponse {
    pub fn into_profile(self) -> Result<PlatformProfile, MissingAccount> {
        let user = self
            .data
            .and_then(|d| d.user)
            .ok_or(MissingAccount("TikTok did not return the account"))?;

        Ok(PlatformProfile {
            external_id: user.open_id,
            username: user.display_name,
            followers_count: user.follower_count,
        })
    }
}

#[derive(Deserialize, Debug)]
pub struct YouTubeChannelsResponse {
    #[serde(default)]
    items: Vec<YouTubeChannel>,
}

#[derive(Deserialize, Debug)]
struct YouTubeChannel {
    id: String,
    snippet: YouTubeSnippet,
    statistics: Option<YouTubeStatistics>,
}

#[derive(Deserialize, Debug)]
struct YouTubeSnippet {
    title: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct YouTubeStatistics {
    /// Sent as a decimal string; absent when the channel hides its count.
    subscriber_count: Option<String>,
}

impl YouTubeChannelsResponse {
    pub fn into_profile(self) -> Result<PlatformProfile, MissingAccount> {
        let channel = self
            .items
            .into_iter()
            .next()
            .ok_or(MissingAccount("No YouTube channel found for this account"))?;

        let followers_count = channel
            .statistics
            .and_then(|s| s.subscriber_count)
            .and_then(|count| count.parse().ok())
            .unwrap_or(0);

        Ok(PlatformProfile {
            external_id: channel.id,
            username: channel.snippet.title,
            followers_count,
        })
    }
}
