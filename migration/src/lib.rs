pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_user_table;
mod m20250901_000002_create_category_table;
mod m20250901_000003_create_brand_table;
mod m20250901_000004_create_influencer_table;
mod m20250902_000005_create_platform_table;
mod m20250902_000006_create_service_table;
mod m20250902_000007_create_platform_account_table;
mod m20250903_000008_create_campaign_table;
mod m20250903_000009_create_campaign_service_table;
mod m20250903_000010_create_campaign_invitation_table;
mod m20250904_000011_create_mou_table;
mod m20250904_000012_create_mou_approval_table;
mod m20250905_000013_create_notification_table;
mod m20250906_000014_create_influencer_metric_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_user_table::Migration),
            Box::new(m20250901_000002_create_category_table::Migration),
            Box::new(m20250901_000003_create_brand_table::Migration),
            Box::new(m20250901_000004_create_influencer_table::Migration),
            Box::new(m20250902_000005_create_platform_table::Migration),
            Box::new(m20250902_000006_create_service_table::Migration),
            Box::new(m20250902_000007_create_platform_account_table::Migration),
            Box::new(m20250903_000008_create_campaign_table::Migration),
            Box::new(m20250903_000009_create_campaign_service_table::Migration),
            Box::new(m20250903_000010_create_campaign_invitation_table::Migration),
            Box::new(m20250904_000011_create_mou_table::Migration),
            Box::new(m20250904_000012_create_mou_approval_table::Migration),
            Box::new(m20250905_000013_create_notification_table::Migration),
            Box::new(m20250906_000014_create_influencer_metric_table::Migration),
        ]
    }
}
