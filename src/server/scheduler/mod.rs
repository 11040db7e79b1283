//! Cron jobs started alongside the HTTP server.

pub mod campaign_expiry;
pub mod session_cleanup;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::JobScheduler;
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::error::AppError;

/// Starts the background scheduler.
///
/// Registers:
/// - the campaign expiry sweep, every minute
/// - the expired session cleanup, every hour
///
/// # Arguments
/// - `db` - Database connection
/// - `app_url` - Application URL for notification links
/// - `session_store` - Session store to purge expired sessions from
pub async fn start_scheduler(
    db: DatabaseConnection,
    app_url: String,
    session_store: SqliteStore,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    scheduler.add(campaign_expiry::job(db, app_url)?).await?;
    scheduler.add(session_cleanup::job(session_store)?).await?;

    scheduler.start().await?;

    tracing::info!("Scheduler started");

    Ok(scheduler)
}
