use tokio_cron_scheduler::{Job, JobSchedulerError};
use tower_sessions::session_store::ExpiredDeletion;
use tower_sessions_sqlx_store::SqliteStore;

/// Every hour, on the hour.
const SCHEDULE: &str = "0 0 * * * *";

/// Builds the job deleting sessions past their expiry from the store.
pub fn job(session_store: SqliteStore) -> Result<Job, JobSchedulerError> {
    Job::new_async(SCHEDULE, move |_uuid, _lock| {
        let store = session_store.clone();

        Box::pin(async move {
            if let Err(e) = store.delete_expired().await {
                tracing::error!("Error deleting expired sessions: {}", e);
            }
        })
    })
}
