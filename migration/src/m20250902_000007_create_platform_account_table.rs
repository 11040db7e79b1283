use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250901_000004_create_influencer_table::Influencer,
    m20250902_000005_create_platform_table::Platform,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlatformAccount::Table)
                    .if_not_exists()
                    .col(pk_auto(PlatformAccount::Id))
                    .col(integer(PlatformAccount::InfluencerId))
                    .col(integer(PlatformAccount::PlatformId))
                    .col(string(PlatformAccount::ExternalId))
                    .col(string(PlatformAccount::Username))
                    .col(text(PlatformAccount::AccessToken))
                    .col(text_null(PlatformAccount::RefreshToken))
                    .col(timestamp_null(PlatformAccount::TokenExpiresAt))
                    .col(big_integer(PlatformAccount::FollowersCount).default(0))
                    .col(
                        timestamp(PlatformAccount::ConnectedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(PlatformAccount::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_platform_account_influencer_id")
                            .from(PlatformAccount::Table, PlatformAccount::InfluencerId)
                            .to(Influencer::Table, Influencer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_platform_account_platform_id")
                            .from(PlatformAccount::Table, PlatformAccount::PlatformId)
                            .to(Platform::Table, Platform::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_platform_account_influencer_platform")
                    .table(PlatformAccount::Table)
                    .col(PlatformAccount::InfluencerId)
                    .col(PlatformAccount::PlatformId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlatformAccount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlatformAccount {
    Table,
    Id,
    InfluencerId,
    PlatformId,
    ExternalId,
    Username,
    AccessToken,
    RefreshToken,
    TokenExpiresAt,
    FollowersCount,
    ConnectedAt,
    UpdatedAt,
}
