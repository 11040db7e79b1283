//! Metric models and the rate calculations behind them.
//!
//! Every rate is a percentage rounded to two decimals and is 0 when its
//! denominator is 0.

use chrono::{DateTime, Utc};

use crate::model::{
    metrics::{AdminOverviewDto, CampaignMetricsDto, InfluencerMetricsDto, RoleCountDto, StatusCountDto},
    status::InvitationStatus,
};

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `numerator / denominator × 100`, rounded, or 0 for an empty denominator.
pub fn percentage(numerator: f64, denominator: f64) -> f64 {
    if denominator <= 0.0 {
        return 0.0;
    }
    round2(numerator / denominator * 100.0)
}

/// Adds up counters, clamping at `i64::MAX` instead of overflowing.
pub fn saturating_total(values: impl IntoIterator<Item = i64>) -> i64 {
    values.into_iter().fold(0, i64::saturating_add)
}

/// The parts of an invitation the influencer rates are computed from.
#[derive(Debug, Clone)]
pub struct InvitationSample {
    pub status: InvitationStatus,
    pub reach: i64,
    pub engagements: i64,
    pub delivered_at: Option<DateTime<Utc>>,
    pub campaign_end_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfluencerRates {
    pub reach_rate: f64,
    pub engagement_rate: f64,
    pub response_rate: f64,
    pub completion_rate: f64,
    pub on_time_delivery_rate: f64,
}

impl InfluencerRates {
    /// Computes all rates for one influencer.
    ///
    /// # Arguments
    /// - `followers` - Sum of follower counts across the influencer's connected accounts
    /// - `samples` - Every invitation the influencer has received
    pub fn compute(followers: i64, samples: &[InvitationSample]) -> Self {
        let completed: Vec<&InvitationSample> = samples
            .iter()
            .filter(|s| s.status == InvitationStatus::Completed)
            .collect();

        let reach_rate = if followers > 0 && !completed.is_empty() {
            let sum: f64 = completed
                .iter()
                .map(|s| s.reach as f64 / followers as f64 * 100.0)
                .sum();
            round2(sum / completed.len() as f64)
        } else {
            0.0
        };

        let total_reach = saturating_total(completed.iter().map(|s| s.reach));
        let total_engagements = saturating_total(completed.iter().map(|s| s.engagements));
        let engagement_rate = percentage(total_engagements as f64, total_reach as f64);

        let responded = samples
            .iter()
            .filter(|s| s.status != InvitationStatus::Pending)
            .count();
        let response_rate = percentage(responded as f64, samples.len() as f64);

        let accepted = samples
            .iter()
            .filter(|s| s.status == InvitationStatus::Accepted)
            .count();
        let completion_rate = percentage(
            completed.len() as f64,
            (accepted + completed.len()) as f64,
        );

        let on_time = completed
            .iter()
            .filter(|s| s.delivered_at.is_some_and(|d| d <= s.campaign_end_date))
            .count();
        let on_time_delivery_rate = percentage(on_time as f64, completed.len() as f64);

        Self {
            reach_rate,
            engagement_rate,
            response_rate,
            completion_rate,
            on_time_delivery_rate,
        }
    }
}

/// Stored influencer rates with the time they were computed.
#[derive(Debug, Clone, PartialEq)]
pub struct InfluencerMetrics {
    pub influencer_id: i32,
    pub rates: InfluencerRates,
    pub computed_at: DateTime<Utc>,
}

impl InfluencerMetrics {
    pub fn from_entity(entity: entity::influencer_metric::Model) -> Self {
        Self {
            influencer_id: entity.influencer_id,
            rates: InfluencerRates {
                reach_rate: entity.reach_rate,
                engagement_rate: entity.engagement_rate,
                response_rate: entity.response_rate,
                completion_rate: entity.completion_rate,
                on_time_delivery_rate: entity.on_time_delivery_rate,
            },
            computed_at: entity.computed_at,
        }
    }

    pub fn into_dto(self) -> InfluencerMetricsDto {
        InfluencerMetricsDto {
            influencer_id: self.influencer_id,
            reach_rate: self.rates.reach_rate,
            engagement_rate: self.rates.engagement_rate,
            response_rate: self.rates.response_rate,
            completion_rate: self.rates.completion_rate,
            on_time_delivery_rate: self.rates.on_time_delivery_rate,
            computed_at: self.computed_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CampaignMetrics {
    pub campaign_id: i32,
    pub invited: u64,
    pub pending: u64,
    pub accepted: u64,
    pub declined: u64,
    pub completed: u64,
    pub total_reach: i64,
    pub total_impressions: i64,
    pub total_engagements: i64,
    pub engagement_rate: f64,
    pub completion_rate: f64,
}

impl CampaignMetrics {
    /// Aggregates a campaign's invitations as `(status, reach, impressions, engagements)`.
    pub fn compute(campaign_id: i32, invitations: &[(InvitationStatus, i64, i64, i64)]) -> Self {
        let count = |status: InvitationStatus| {
            invitations.iter().filter(|(s, ..)| *s == status).count() as u64
        };

        let pending = count(InvitationStatus::Pending);
        let accepted = count(InvitationStatus::Accepted);
        let declined = count(InvitationStatus::Declined);
        let completed = count(InvitationStatus::Completed);

        let total_reach = saturating_total(invitations.iter().map(|(_, r, _, _)| *r));
        let total_impressions = saturating_total(invitations.iter().map(|(_, _, i, _)| *i));
        let total_engagements = saturating_total(invitations.iter().map(|(_, _, _, e)| *e));

        Self {
            campaign_id,
            invited: invitations.len() as u64,
            pending,
            accepted,
            declined,
            completed,
            total_reach,
            total_impressions,
            total_engagements,
            engagement_rate: percentage(total_engagements as f64, total_reach as f64),
            completion_rate: percentage(completed as f64, (accepted + completed) as f64),
        }
    }

    pub fn into_dto(self) -> CampaignMetricsDto {
        CampaignMetricsDto {
            campaign_id: self.campaign_id,
            invited: self.invited,
            pending: self.pending,
            accepted: self.accepted,
            declined: self.declined,
            completed: self.completed,
            total_reach: self.total_reach,
            total_impressions: self.total_impressions,
            total_engagements: self.total_engagements,
            engagement_rate: self.engagement_rate,
            completion_rate: self.completion_rate,
        }
    }
}

/// Platform-wide counts for the admin dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminOverview {
    pub users: Vec<(String, u64)>,
    pub campaigns: Vec<(String, u64)>,
    pub pending_brands: u64,
    pub pending_influencers: u64,
}

impl AdminOverview {
    pub fn into_dto(self) -> AdminOverviewDto {
        AdminOverviewDto {
            users: self
                .users
                .into_iter()
                .map(|(role, count)| RoleCountDto { role, count })
                .collect(),
            campaigns: self
                .campaigns
                .into_iter()
                .map(|(status, count)| StatusCountDto { status, count })
                .collect(),
            pending_brands: self.pending_brands,
            pending_influencers: self.pending_influencers,
        }
    }
}
