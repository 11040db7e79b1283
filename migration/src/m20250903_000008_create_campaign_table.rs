use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250901_000002_create_category_table::Category, m20250901_000003_create_brand_table::Brand,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Campaign::Table)
                    .if_not_exists()
                    .col(pk_auto(Campaign::Id))
                    .col(integer(Campaign::BrandId))
                    .col(integer_null(Campaign::CategoryId))
                    .col(string(Campaign::Name))
                    .col(text_null(Campaign::Description))
                    .col(big_integer(Campaign::Budget).default(0))
                    .col(timestamp(Campaign::StartDate))
                    .col(timestamp(Campaign::EndDate))
                    .col(string(Campaign::Status))
                    .col(text_null(Campaign::RejectionReason))
                    .col(
                        timestamp(Campaign::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Campaign::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campaign_brand_id")
                            .from(Campaign::Table, Campaign::BrandId)
                            .to(Brand::Table, Brand::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campaign_category_id")
                            .from(Campaign::Table, Campaign::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The expiry sweep filters on status and end date every minute
        manager
            .create_index(
                Index::create()
                    .name("idx_campaign_status_end_date")
                    .table(Campaign::Table)
                    .col(Campaign::Status)
                    .col(Campaign::EndDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Campaign::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Campaign {
    Table,
    Id,
    BrandId,
    CategoryId,
    Name,
    Description,
    Budget,
    StartDate,
    EndDate,
    Status,
    RejectionReason,
    CreatedAt,
    UpdatedAt,
}
