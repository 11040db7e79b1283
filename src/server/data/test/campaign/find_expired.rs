use super::*;

/// Tests that only active campaigns past their end date are expired.
///
/// Expected: Ok with just the active campaign that ended yesterday
#[tokio::test]
async fn finds_active_campaigns_past_end_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, brand) = factory::helpers::create_brand_with_user(db).await?;
    let now = Utc::now();

    let expired = factory::campaign::CampaignFactory::new(db, brand.id)
        .status("ACTIVE")
        .start_date(now - Duration::days(10))
        .end_date(now - Duration::days(1))
        .build()
        .await?;
    factory::campaign::CampaignFactory::new(db, brand.id)
        .status("ACTIVE")
        .build()
        .await?;
    factory::campaign::CampaignFactory::new(db, brand.id)
        .status("PENDING")
        .start_date(now - Duration::days(10))
        .end_date(now - Duration::days(1))
        .build()
        .await?;

    let repo = CampaignRepository::new(db);
    let found = repo.find_expired(now).await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, expired.id);

    Ok(())
}
