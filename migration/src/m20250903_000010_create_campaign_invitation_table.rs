use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250901_000004_create_influencer_table::Influencer,
    m20250903_000008_create_campaign_table::Campaign,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CampaignInvitation::Table)
                    .if_not_exists()
                    .col(pk_auto(CampaignInvitation::Id))
                    .col(integer(CampaignInvitation::CampaignId))
                    .col(integer(CampaignInvitation::InfluencerId))
                    .col(string(CampaignInvitation::Status))
                    .col(text_null(CampaignInvitation::Message))
                    .col(
                        timestamp(CampaignInvitation::InvitedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(CampaignInvitation::RespondedAt))
                    .col(timestamp_null(CampaignInvitation::DeliveredAt))
                    .col(string_null(CampaignInvitation::ContentUrl))
                    .col(big_integer(CampaignInvitation::Reach).default(0))
                    .col(big_integer(CampaignInvitation::Impressions).default(0))
                    .col(big_integer(CampaignInvitation::Engagements).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campaign_invitation_campaign_id")
                            .from(CampaignInvitation::Table, CampaignInvitation::CampaignId)
                            .to(Campaign::Table, Campaign::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campaign_invitation_influencer_id")
                            .from(CampaignInvitation::Table, CampaignInvitation::InfluencerId)
                            .to(Influencer::Table, Influencer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_campaign_invitation_campaign_influencer")
                    .table(CampaignInvitation::Table)
                    .col(CampaignInvitation::CampaignId)
                    .col(CampaignInvitation::InfluencerId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CampaignInvitation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CampaignInvitation {
    Table,
    Id,
    CampaignId,
    InfluencerId,
    Status,
    Message,
    InvitedAt,
    RespondedAt,
    DeliveredAt,
    ContentUrl,
    Reach,
    Impressions,
    Engagements,
}
