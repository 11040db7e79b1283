use super::*;

/// Tests creating a campaign for an approved brand.
///
/// Expected: Ok with status PENDING, requested services attached and every admin notified
#[tokio::test]
async fn creates_pending_campaign_and_notifies_admins() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let (brand_user, brand) = factory::helpers::create_brand_with_user(db).await?;
    let platform = factory::create_platform(db).await?;
    let service = factory::create_service(db, platform.id).await?;

    let campaign = CampaignService::new(db, APP_URL)
        .create(brand_user.id, param(vec![service.id]))
        .await?;

    assert_eq!(campaign.brand_id, brand.id);
    assert_eq!(campaign.status, CampaignStatus::Pending);
    assert_eq!(campaign.service_ids, vec![service.id]);
    assert_eq!(unread(db, admin.id).await, 1);

    Ok(())
}

/// Tests creating a campaign while the brand awaits review.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn rejects_unapproved_brand() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand_user = factory::create_brand_user(db).await?;
    factory::brand::BrandFactory::new(db, brand_user.id)
        .status("PENDING")
        .build()
        .await?;

    let result = CampaignService::new(db, APP_URL)
        .create(brand_user.id, param(vec![]))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests creating a campaign that requests a service that doesn't exist.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_unknown_service() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (brand_user, _) = factory::helpers::create_brand_with_user(db).await?;

    let result = CampaignService::new(db, APP_URL)
        .create(brand_user.id, param(vec![404]))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests editing a campaign after approval.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn update_requires_pending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, brand) = factory::helpers::create_brand_with_user(db).await?;
    let campaign = factory::campaign::CampaignFactory::new(db, brand.id)
        .status("ACTIVE")
        .build()
        .await?;

    let result = CampaignService::new(db, APP_URL)
        .update(campaign.id, param(vec![]))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
