use super::*;

/// Tests building an authorization URL for a platform without credentials.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn unconfigured_platform() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let http = reqwest::Client::new();
    let clients = oauth_clients();

    let service = PlatformConnectService::new(db, &http, &clients);

    assert!(matches!(
        service.authorize_url(PlatformKind::Instagram),
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests the TikTok authorization URL.
///
/// Expected: carries the state, the client key and the callback for the platform
#[tokio::test]
async fn tiktok_url_carries_client_key() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let http = reqwest::Client::new();
    let clients = oauth_clients();

    let (url, state) = PlatformConnectService::new(db, &http, &clients)
        .authorize_url(PlatformKind::TikTok)?;

    let params: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let param = |name: &str| {
        params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    };

    assert_eq!(url.host_str(), Some("www.tiktok.com"));
    assert_eq!(param("state").as_deref(), Some(state.secret().as_str()));
    assert_eq!(param("client_key").as_deref(), Some("tiktok-key"));
    assert_eq!(
        param("redirect_uri").as_deref(),
        Some("http://localhost:8080/api/oauth/tiktok/callback")
    );

    Ok(())
}

/// Tests the YouTube authorization URL.
///
/// Expected: requests offline access so a refresh token is issued
#[tokio::test]
async fn youtube_url_requests_offline_access() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let http = reqwest::Client::new();
    let clients = oauth_clients();

    let (url, _) = PlatformConnectService::new(db, &http, &clients)
        .authorize_url(PlatformKind::YouTube)?;

    assert!(url
        .query_pairs()
        .any(|(key, value)| key == "access_type" && value == "offline"));

    Ok(())
}
