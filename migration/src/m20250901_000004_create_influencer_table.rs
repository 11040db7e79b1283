use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250901_000001_create_user_table::User, m20250901_000002_create_category_table::Category,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Influencer::Table)
                    .if_not_exists()
                    .col(pk_auto(Influencer::Id))
                    .col(integer_uniq(Influencer::UserId))
                    .col(string(Influencer::DisplayName))
                    .col(text_null(Influencer::Bio))
                    .col(string_null(Influencer::Country))
                    .col(integer_null(Influencer::CategoryId))
                    .col(string(Influencer::Status))
                    .col(
                        timestamp(Influencer::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Influencer::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_influencer_user_id")
                            .from(Influencer::Table, Influencer::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_influencer_category_id")
                            .from(Influencer::Table, Influencer::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Influencer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Influencer {
    Table,
    Id,
    UserId,
    DisplayName,
    Bio,
    Country,
    CategoryId,
    Status,
    CreatedAt,
    UpdatedAt,
}
