use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250902_000006_create_service_table::Service,
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
                    .table(CampaignService::Table)
                    .if_not_exists()
                    .col(integer(CampaignService::CampaignId))
                    .col(integer(CampaignService::ServiceId))
                    .primary_key(
                        Index::create()
                            .col(CampaignService::CampaignId)
                            .col(CampaignService::ServiceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campaign_service_campaign_id")
                            .from(CampaignService::Table, CampaignService::CampaignId)
                            .to(Campaign::Table, Campaign::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campaign_service_service_id")
                            .from(CampaignService::Table, CampaignService::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CampaignService::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CampaignService {
    Table,
    CampaignId,
    ServiceId,
}
