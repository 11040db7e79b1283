use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Platform::Table)
                    .if_not_exists()
                    .col(pk_auto(Platform::Id))
                    .col(string(Platform::Name))
                    .col(string_uniq(Platform::Slug))
                    .col(boolean(Platform::Active).default(true))
                    .to_owned(),
            )
            .await?;

        // Seed the platforms that have an OAuth connector
        let seed = Query::insert()
            .into_table(Platform::Table)
            .columns([Platform::Name, Platform::Slug, Platform::Active])
            .values_panic(["Instagram".into(), "instagram".into(), true.into()])
            .values_panic(["Facebook".into(), "facebook".into(), true.into()])
            .values_panic(["TikTok".into(), "tiktok".into(), true.into()])
            .values_panic(["YouTube".into(), "youtube".into(), true.into()])
            .to_owned();

        manager.exec_stmt(seed).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Platform::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Platform {
    Table,
    Id,
    Name,
    Slug,
    Active,
}
