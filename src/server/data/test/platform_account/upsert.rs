use super::*;

/// Tests connecting an account and connecting the same platform again.
///
/// Verifies that the second upsert refreshes the existing row instead of adding one.
///
/// Expected: Ok with one stored account carrying the latest follower count and token
#[tokio::test]
async fn refreshes_existing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, influencer) = factory::helpers::create_influencer_with_user(db).await?;
    let platform = factory::create_platform_with_slug(db, "instagram").await?;

    let repo = PlatformAccountRepository::new(db);
    let first = repo.upsert(param(influencer.id, platform.id, 100)).await?;

    let mut second = param(influencer.id, platform.id, 250);
    second.access_token = "new-token".to_string();
    let second = repo.upsert(second).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.followers_count, 250);
    assert_eq!(second.platform_slug, "instagram");
    assert_eq!(second.connected_at, first.connected_at);

    let rows = entity::prelude::PlatformAccount::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].access_token, "new-token");

    Ok(())
}

/// Tests connecting to a platform that doesn't exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_platform() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, influencer) = factory::helpers::create_influencer_with_user(db).await?;

    let repo = PlatformAccountRepository::new(db);
    let result = repo.upsert(param(influencer.id, 999, 10)).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
