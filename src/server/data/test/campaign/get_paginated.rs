use super::*;

/// Tests that each scope sees only its campaigns.
///
/// Verifies that a brand sees its own campaigns, an influencer sees campaigns it is
/// invited to, and the unscoped listing sees everything.
///
/// Expected: Ok with 1, 1 and 2 campaigns respectively
#[tokio::test]
async fn scopes_campaigns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, brand, own) = factory::helpers::create_campaign_with_dependencies(db).await?;
    let (_, _, other) = factory::helpers::create_campaign_with_dependencies(db).await?;
    let (_, influencer) = factory::helpers::create_influencer_with_user(db).await?;
    factory::create_invitation(db, other.id, influencer.id).await?;

    let repo = CampaignRepository::new(db);

    let (campaigns, total) = repo
        .get_paginated(CampaignScope::Brand(brand.id), None, 0, 10)
        .await?;
    assert_eq!(total, 1);
    assert_eq!(campaigns[0].id, own.id);

    let (campaigns, total) = repo
        .get_paginated(CampaignScope::Influencer(influencer.id), None, 0, 10)
        .await?;
    assert_eq!(total, 1);
    assert_eq!(campaigns[0].id, other.id);

    let (_, total) = repo.get_paginated(CampaignScope::All, None, 0, 10).await?;
    assert_eq!(total, 2);

    Ok(())
}

/// Tests the status filter and newest-first ordering.
///
/// Expected: Ok with the active campaigns, newest first
#[tokio::test]
async fn filters_by_status_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, brand) = factory::helpers::create_brand_with_user(db).await?;
    let older = factory::campaign::CampaignFactory::new(db, brand.id)
        .status("ACTIVE")
        .build()
        .await?;
    let newer = factory::campaign::CampaignFactory::new(db, brand.id)
        .status("ACTIVE")
        .build()
        .await?;
    factory::create_campaign(db, brand.id).await?;

    let repo = CampaignRepository::new(db);
    let (campaigns, total) = repo
        .get_paginated(CampaignScope::All, Some(CampaignStatus::Active), 0, 10)
        .await?;

    assert_eq!(total, 2);
    let ids: Vec<_> = campaigns.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}
