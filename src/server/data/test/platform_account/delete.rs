use super::*;

/// Tests follower totals across platforms and disconnecting one of them.
///
/// Expected: Ok with the sum of both accounts, then only the remaining one
#[tokio::test]
async fn disconnects_and_sums_followers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, influencer) = factory::helpers::create_influencer_with_user(db).await?;
    let instagram = factory::create_platform_with_slug(db, "instagram").await?;
    let youtube = factory::create_platform_with_slug(db, "youtube").await?;
    factory::platform_account::PlatformAccountFactory::new(db, influencer.id, instagram.id)
        .followers(1200)
        .build()
        .await?;
    factory::platform_account::PlatformAccountFactory::new(db, influencer.id, youtube.id)
        .followers(300)
        .build()
        .await?;

    let repo = PlatformAccountRepository::new(db);
    assert_eq!(repo.total_followers(influencer.id).await?, 1500);
    assert_eq!(repo.get_by_influencer(influencer.id).await?.len(), 2);

    assert!(repo.delete(influencer.id, youtube.id).await?);
    assert!(!repo.delete(influencer.id, youtube.id).await?);
    assert_eq!(repo.total_followers(influencer.id).await?, 1200);

    Ok(())
}
