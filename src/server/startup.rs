use oauth2::{basic::BasicClient, AuthType, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use std::{collections::HashMap, sync::Arc};
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{internal::InternalError, AppError},
    model::platform::PlatformKind,
    service::{admin::code::AdminCodeService, oauth::provider::provider_for},
    state::{OAuthApp, OAuthClients},
};

/// Sessions expire after this long without a request.
pub const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session store in the application database.
///
/// Sessions share the SeaORM connection pool and expire after a week of inactivity.
/// Cookies use `SameSite=Lax` so they survive the redirect back from OAuth providers,
/// and are marked secure whenever the application is served over HTTPS.
///
/// # Returns
/// - `Ok((layer, store))` - Session layer for the router and the store for cleanup jobs
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<(SessionManagerLayer<SqliteStore>, SqliteStore), AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let layer = SessionManagerLayer::new(session_store.clone())
        .with_secure(config.app_url.starts_with("https://"))
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS)));

    Ok((layer, session_store))
}

/// Builds the HTTP client used for platform API calls.
///
/// Redirects are disabled so a platform response can never bounce requests to
/// internal addresses.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(concat!("campaignhub/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

/// Builds an OAuth2 client for every platform with credentials configured.
///
/// Platforms without credentials are left out and their connect route reports
/// them as not configured.
pub fn setup_oauth_clients(config: &Config) -> Result<OAuthClients, AppError> {
    let mut clients = HashMap::new();

    for kind in PlatformKind::ALL {
        let Some(credentials) = config.credentials(kind) else {
            tracing::info!("{} connector disabled: no credentials configured", kind);
            continue;
        };

        let provider = provider_for(kind);

        let client = BasicClient::new(ClientId::new(credentials.client_id.clone()))
            .set_client_secret(ClientSecret::new(credentials.client_secret.clone()))
            .set_auth_uri(AuthUrl::new(provider.auth_url.to_string()).map_err(|e| {
                InternalError::InvalidOAuthUrl {
                    url: provider.auth_url.to_string(),
                    reason: e.to_string(),
                }
            })?)
            .set_token_uri(TokenUrl::new(provider.token_url.to_string()).map_err(|e| {
                InternalError::InvalidOAuthUrl {
                    url: provider.token_url.to_string(),
                    reason: e.to_string(),
                }
            })?)
            .set_redirect_uri(RedirectUrl::new(config.redirect_url(kind)).map_err(|e| {
                InternalError::InvalidOAuthUrl {
                    url: config.redirect_url(kind),
                    reason: e.to_string(),
                }
            })?)
            .set_auth_type(AuthType::RequestBody);

        clients.insert(
            kind,
            OAuthApp {
                client,
                client_id: credentials.client_id.clone(),
            },
        );
    }

    Ok(Arc::new(clients))
}

/// Logs a one-time admin registration link when no admin account exists.
///
/// The code is valid for 60 seconds; restarting the server issues a fresh one.
pub async fn check_for_admin(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
    admin_code_service: &AdminCodeService,
) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(());
    }

    let code = admin_code_service.issue().await;

    tracing::info!(
        "No admin account exists. Register one within 60 seconds at: {}/register?admin_code={}",
        config.app_url,
        code
    );

    Ok(())
}
