use sea_orm_migration::{prelude::*, schema::*};

use super::m20250901_000004_create_influencer_table::Influencer;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InfluencerMetric::Table)
                    .if_not_exists()
                    .col(pk_auto(InfluencerMetric::Id))
                    .col(integer_uniq(InfluencerMetric::InfluencerId))
                    .col(double(InfluencerMetric::ReachRate).default(0.0))
                    .col(double(InfluencerMetric::EngagementRate).default(0.0))
                    .col(double(InfluencerMetric::ResponseRate).default(0.0))
                    .col(double(InfluencerMetric::CompletionRate).default(0.0))
                    .col(double(InfluencerMetric::OnTimeDeliveryRate).default(0.0))
                    .col(
                        timestamp(InfluencerMetric::ComputedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_influencer_metric_influencer_id")
                            .from(InfluencerMetric::Table, InfluencerMetric::InfluencerId)
                            .to(Influencer::Table, Influencer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InfluencerMetric::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum InfluencerMetric {
    Table,
    Id,
    InfluencerId,
    ReachRate,
    EngagementRate,
    ResponseRate,
    CompletionRate,
    OnTimeDeliveryRate,
    ComputedAt,
}
