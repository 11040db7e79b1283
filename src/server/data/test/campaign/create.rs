use super::*;

/// Tests creating a campaign with requested services.
///
/// Expected: Ok with status PENDING and the services attached on reload
#[tokio::test]
async fn creates_campaign_with_services() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, brand) = factory::helpers::create_brand_with_user(db).await?;
    let platform = factory::create_platform(db).await?;
    let first = factory::create_service(db, platform.id).await?;
    let second = factory::create_service(db, platform.id).await?;

    let repo = CampaignRepository::new(db);
    let campaign = repo
        .create(brand.id, param(vec![first.id, second.id]))
        .await?;

    assert_eq!(campaign.status, CampaignStatus::Pending);
    assert_eq!(campaign.brand_id, brand.id);

    let reloaded = repo.find_by_id(campaign.id).await?.unwrap();
    assert_eq!(reloaded.service_ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that updating a campaign replaces its services.
///
/// Expected: Ok(Some) with only the new service attached
#[tokio::test]
async fn update_replaces_services() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, brand) = factory::helpers::create_brand_with_user(db).await?;
    let platform = factory::create_platform(db).await?;
    let old = factory::create_service(db, platform.id).await?;
    let new = factory::create_service(db, platform.id).await?;

    let repo = CampaignRepository::new(db);
    let campaign = repo.create(brand.id, param(vec![old.id])).await?;

    let mut update = param(vec![new.id]);
    update.name = "Summer launch".to_string();
    let updated = repo.update(campaign.id, update).await?.unwrap();

    assert_eq!(updated.name, "Summer launch");
    assert_eq!(updated.service_ids, vec![new.id]);
    assert_eq!(
        repo.find_by_id(campaign.id).await?.unwrap().service_ids,
        vec![new.id]
    );

    Ok(())
}
