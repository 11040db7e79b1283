mod model;
mod server;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::{internal::InternalError, AppError},
    router, scheduler,
    service::admin::code::AdminCodeService,
    startup,
    state::AppState,
};

const DEFAULT_LOG_FILTER: &str = "campaignhub=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let (session, session_store) = startup::connect_to_session(&db, &config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_clients = startup::setup_oauth_clients(&config)?;

    let admin_code_service = AdminCodeService::new();

    tracing::info!("Starting server");

    // Check for admin users and log a registration link if none exist
    startup::check_for_admin(&db, &config, &admin_code_service).await?;

    let _scheduler =
        scheduler::start_scheduler(db.clone(), config.app_url.clone(), session_store).await?;

    let app = router::router(&config.app_url)?
        .with_state(AppState::new(
            db,
            http_client,
            oauth_clients,
            admin_code_service,
            config.app_url.clone(),
        ))
        .layer(session);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(InternalError::from)?;

    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .await
        .map_err(InternalError::from)?;

    Ok(())
}
