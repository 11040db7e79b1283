use sea_orm_migration::{prelude::*, schema::*};

use super::{m20250901_000001_create_user_table::User, m20250904_000011_create_mou_table::Mou};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MouApproval::Table)
                    .if_not_exists()
                    .col(pk_auto(MouApproval::Id))
                    .col(integer(MouApproval::MouId))
                    .col(integer(MouApproval::UserId))
                    .col(string(MouApproval::Party))
                    .col(string(MouApproval::Decision))
                    .col(text_null(MouApproval::Comment))
                    .col(
                        timestamp(MouApproval::DecidedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mou_approval_mou_id")
                            .from(MouApproval::Table, MouApproval::MouId)
                            .to(Mou::Table, Mou::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mou_approval_user_id")
                            .from(MouApproval::Table, MouApproval::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mou_approval_mou_user")
                    .table(MouApproval::Table)
                    .col(MouApproval::MouId)
                    .col(MouApproval::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MouApproval::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MouApproval {
    Table,
    Id,
    MouId,
    UserId,
    Party,
    Decision,
    Comment,
    DecidedAt,
}
