//! Stored influencer metrics repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::model::metrics::{InfluencerMetrics, InfluencerRates};

pub struct InfluencerMetricRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InfluencerMetricRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_influencer(
        &self,
        influencer_id: i32,
    ) -> Result<Option<InfluencerMetrics>, DbErr> {
        Ok(entity::prelude::InfluencerMetric::find()
            .filter(entity::influencer_metric::Column::InfluencerId.eq(influencer_id))
            .one(self.db)
            .await?
            .map(InfluencerMetrics::from_entity))
    }

    /// Stores freshly computed rates, replacing any previous snapshot.
    ///
    /// # Arguments
    /// - `influencer_id` - Influencer the rates belong to
    /// - `rates` - Computed percentages
    /// - `computed_at` - Timestamp used for freshness checks
    pub async fn upsert(
        &self,
        influencer_id: i32,
        rates: InfluencerRates,
        computed_at: DateTime<Utc>,
    ) -> Result<InfluencerMetrics, DbErr> {
        let existing = entity::prelude::InfluencerMetric::find()
            .filter(entity::influencer_metric::Column::InfluencerId.eq(influencer_id))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(existing) => {
                let mut active = existing.into_active_model();
                active.reach_rate = ActiveValue::Set(rates.reach_rate);
                active.engagement_rate = ActiveValue::Set(rates.engagement_rate);
                active.response_rate = ActiveValue::Set(rates.response_rate);
                active.completion_rate = ActiveValue::Set(rates.completion_rate);
                active.on_time_delivery_rate = ActiveValue::Set(rates.on_time_delivery_rate);
                active.computed_at = ActiveValue::Set(computed_at);
                active.update(self.db).await?
            }
            None => {
                entity::influencer_metric::ActiveModel {
                    influencer_id: ActiveValue::Set(influencer_id),
                    reach_rate: ActiveValue::Set(rates.reach_rate),
                    engagement_rate: ActiveValue::Set(rates.engagement_rate),
                    response_rate: ActiveValue::Set(rates.response_rate),
                    completion_rate: ActiveValue::Set(rates.completion_rate),
                    on_time_delivery_rate: ActiveValue::Set(rates.on_time_delivery_rate),
                    computed_at: ActiveValue::Set(computed_at),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(InfluencerMetrics::from_entity(entity))
    }
}
