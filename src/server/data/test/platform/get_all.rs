use super::*;

/// Tests listing platforms with and without inactive ones.
///
/// Expected: Ok with 1 active platform and 2 in total
#[tokio::test]
async fn excludes_inactive_unless_requested() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Platform)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_platform_with_slug(db, "instagram").await?;
    factory::platform::PlatformFactory::new(db)
        .slug("tiktok")
        .active(false)
        .build()
        .await?;

    let repo = PlatformRepository::new(db);
    let active = repo.get_all(false).await?;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].slug, "instagram");

    assert_eq!(repo.get_all(true).await?.len(), 2);
    assert!(repo.find_by_slug("tiktok").await?.is_some());
    assert!(repo.find_by_slug("youtube").await?.is_none());

    Ok(())
}
