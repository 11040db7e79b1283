use super::*;

/// Tests computing an influencer's rates from invitations and followers.
///
/// Expected: rates derived from one on-time delivery and one pending invitation
#[tokio::test]
async fn computes_and_stores_rates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let (_, brand) = factory::helpers::create_brand_with_user(db).await?;
    let (_, influencer) = factory::helpers::create_influencer_with_user(db).await?;
    let platform = factory::create_platform(db).await?;
    factory::platform_account::PlatformAccountFactory::new(db, influencer.id, platform.id)
        .followers(2000)
        .build()
        .await?;

    let delivered = factory::campaign::CampaignFactory::new(db, brand.id)
        .status("ACTIVE")
        .build()
        .await?;
    let other = factory::create_campaign(db, brand.id).await?;
    factory::invitation::InvitationFactory::new(db, delivered.id, influencer.id)
        .delivered(now - Duration::hours(2), 500, 1500, 50)
        .build()
        .await?;
    factory::create_invitation(db, other.id, influencer.id).await?;

    let metrics = MetricsService::new(db)
        .influencer(influencer.id, false, now)
        .await?;

    assert_eq!(metrics.rates.reach_rate, 25.0);
    assert_eq!(metrics.rates.engagement_rate, 10.0);
    assert_eq!(metrics.rates.response_rate, 50.0);
    assert_eq!(metrics.rates.completion_rate, 100.0);
    assert_eq!(metrics.rates.on_time_delivery_rate, 100.0);

    Ok(())
}

/// Tests serving stored rates while fresh and recomputing on refresh.
///
/// Expected: the fresh read keeps the old computed_at, refresh replaces it
#[tokio::test]
async fn serves_fresh_metrics_from_storage() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, influencer) = factory::helpers::create_influencer_with_user(db).await?;
    let service = MetricsService::new(db);

    let computed_at = Utc::now() - Duration::minutes(30);
    service.influencer(influencer.id, false, computed_at).await?;

    let later = computed_at + Duration::minutes(20);
    let cached = service.influencer(influencer.id, false, later).await?;
    assert!(cached.computed_at < computed_at + Duration::minutes(1));

    let refreshed = service.influencer(influencer.id, true, later).await?;
    assert!(refreshed.computed_at > computed_at + Duration::minutes(19));

    let stale = later + Duration::minutes(90);
    let recomputed = service.influencer(influencer.id, false, stale).await?;
    assert!(recomputed.computed_at > later + Duration::minutes(89));

    Ok(())
}

/// Tests metrics for an unknown influencer.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_influencer_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MetricsService::new(db)
        .influencer(42, false, Utc::now())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
