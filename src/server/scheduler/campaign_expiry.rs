use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobSchedulerError};

use crate::server::service::campaign::CampaignService;

/// Every minute, at second zero.
const SCHEDULE: &str = "0 * * * * *";

/// Builds the job completing active campaigns whose end date has passed.
///
/// Each run notifies the participants of every campaign it completes. A failing
/// run is logged and retried by the next tick.
pub fn job(db: DatabaseConnection, app_url: String) -> Result<Job, JobSchedulerError> {
    Job::new_async(SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();
        let app_url = app_url.clone();

        Box::pin(async move {
            match CampaignService::new(&db, &app_url)
                .expire_due(Utc::now())
                .await
            {
                Ok(0) => {}
                Ok(expired) => tracing::info!("Expiry sweep completed {} campaigns", expired),
                Err(e) => tracing::error!("Error expiring campaigns: {}", e),
            }
        })
    })
}
