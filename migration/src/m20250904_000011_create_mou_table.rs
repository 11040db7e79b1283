use sea_orm_migration::{prelude::*, schema::*};

use super::m20250903_000008_create_campaign_table::Campaign;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mou::Table)
                    .if_not_exists()
                    .col(pk_auto(Mou::Id))
                    .col(integer_uniq(Mou::CampaignId))
                    .col(string(Mou::Title))
                    .col(string(Mou::DocumentUrl))
                    .col(string(Mou::Status))
                    .col(
                        timestamp(Mou::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Mou::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mou_campaign_id")
                            .from(Mou::Table, Mou::CampaignId)
                            .to(Campaign::Table, Campaign::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mou::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mou {
    Table,
    Id,
    CampaignId,
    Title,
    DocumentUrl,
    Status,
    CreatedAt,
    UpdatedAt,
}
