//! Influencer, campaign and platform-wide metrics.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::status::{ProfileStatus, UserRole},
    server::{
        data::{
            brand::BrandRepository, campaign::CampaignRepository, influencer::InfluencerRepository,
            invitation::InvitationRepository, metrics::InfluencerMetricRepository,
            platform_account::PlatformAccountRepository, user::UserRepository,
        },
        error::AppError,
        model::metrics::{AdminOverview, CampaignMetrics, InfluencerMetrics, InfluencerRates},
    },
};

/// Stored influencer metrics are served without recomputing while younger than this.
pub const METRICS_MAX_AGE_MINUTES: i64 = 60;

pub struct MetricsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MetricsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets an influencer's rates, recomputing them when stale or when asked to.
    ///
    /// # Arguments
    /// - `influencer_id` - Influencer profile ID
    /// - `refresh` - Recompute even if the stored rates are fresh
    /// - `now` - Current time, used for the freshness check and as `computed_at`
    pub async fn influencer(
        &self,
        influencer_id: i32,
        refresh: bool,
        now: DateTime<Utc>,
    ) -> Result<InfluencerMetrics, AppError> {
        InfluencerRepository::new(self.db)
            .find_by_id(influencer_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Influencer {} not found", influencer_id)))?;

        let repo = InfluencerMetricRepository::new(self.db);

        if !refresh {
            if let Some(stored) = repo.find_by_influencer(influencer_id).await? {
                if now - stored.computed_at < Duration::minutes(METRICS_MAX_AGE_MINUTES) {
                    return Ok(stored);
                }
            }
        }

        let followers = PlatformAccountRepository::new(self.db)
            .total_followers(influencer_id)
            .await?;
        let samples = InvitationRepository::new(self.db)
            .samples_for_influencer(influencer_id)
            .await?;

        let rates = InfluencerRates::compute(followers, &samples);

        tracing::debug!(
            "Recomputed metrics for influencer {} from {} invitations",
            influencer_id,
            samples.len()
        );

        Ok(repo.upsert(influencer_id, rates, now).await?)
    }

    /// Aggregates a campaign's invitations.
    pub async fn campaign(&self, campaign_id: i32) -> Result<CampaignMetrics, AppError> {
        CampaignRepository::new(self.db)
            .find_by_id(campaign_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Campaign {} not found", campaign_id)))?;

        let figures = InvitationRepository::new(self.db)
            .campaign_figures(campaign_id)
            .await?;

        Ok(CampaignMetrics::compute(campaign_id, &figures))
    }

    /// Counts for the admin dashboard.
    pub async fn overview(&self) -> Result<AdminOverview, AppError> {
        let user_repo = UserRepository::new(self.db);

        let mut users = Vec::new();
        for role in [UserRole::Admin, UserRole::Brand, UserRole::Influencer] {
            users.push((role.as_str().to_string(), user_repo.count_by_role(role).await?));
        }

        let campaigns = CampaignRepository::new(self.db)
            .count_by_status()
            .await?
            .into_iter()
            .map(|(status, count)| (status.as_str().to_string(), count))
            .collect();

        Ok(AdminOverview {
            users,
            campaigns,
            pending_brands: BrandRepository::new(self.db)
                .count_by_status(ProfileStatus::Pending)
                .await?,
            pending_influencers: InfluencerRepository::new(self.db)
                .count_by_status(ProfileStatus::Pending)
                .await?,
        })
    }
}
