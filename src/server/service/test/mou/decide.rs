use super::*;

/// Tests the full sign-off by admin, brand and influencer.
///
/// Expected: PENDING until the last approval, then APPROVED and the brand owner notified
#[tokio::test]
async fn approves_once_every_party_signs() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let (brand_user, campaign, influencer_user, _, _) =
        factory::helpers::create_active_campaign_with_invitation(db, "ACCEPTED").await?;
    let service = MouService::new(db, APP_URL);
    service
        .upsert(campaign.id, "Agreement", DOCUMENT_URL)
        .await?;

    let (mou, pending) = service
        .decide(&user(admin), campaign.id, true, None)
        .await?;
    assert_eq!(mou.status, MouStatus::Pending);
    assert_eq!(pending.len(), 2);

    service
        .decide(&user(influencer_user), campaign.id, true, Some("Looks good".to_string()))
        .await?;

    let before = NotificationRepository::new(db)
        .count_unread(brand_user.id)
        .await?;
    let (mou, pending) = service
        .decide(&user(brand_user.clone()), campaign.id, true, None)
        .await?;

    assert_eq!(mou.status, MouStatus::Approved);
    assert!(pending.is_empty());
    assert_eq!(mou.approvals.len(), 3);
    assert_eq!(
        NotificationRepository::new(db)
            .count_unread(brand_user.id)
            .await?,
        before + 1
    );

    Ok(())
}

/// Tests a single rejection.
///
/// Expected: REJECTED immediately and further decisions Err(Conflict)
#[tokio::test]
async fn one_rejection_rejects() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let (brand_user, campaign, _, _, _) =
        factory::helpers::create_active_campaign_with_invitation(db, "ACCEPTED").await?;
    let service = MouService::new(db, APP_URL);
    service
        .upsert(campaign.id, "Agreement", DOCUMENT_URL)
        .await?;

    let (mou, _) = service
        .decide(&user(brand_user), campaign.id, false, Some("Wrong fee".to_string()))
        .await?;
    assert_eq!(mou.status, MouStatus::Rejected);

    let result = service.decide(&user(admin), campaign.id, true, None).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests deciding twice and deciding without being a party.
///
/// Expected: Err(Conflict) for the repeat, Err(AccessDenied) for the outsider
#[tokio::test]
async fn rejects_repeat_and_outsider() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let (_, campaign, _, _, _) =
        factory::helpers::create_active_campaign_with_invitation(db, "DECLINED").await?;
    let (outsider, _) = factory::helpers::create_influencer_with_user(db).await?;
    let service = MouService::new(db, APP_URL);
    service
        .upsert(campaign.id, "Agreement", DOCUMENT_URL)
        .await?;

    service
        .decide(&user(admin.clone()), campaign.id, true, None)
        .await?;
    assert!(matches!(
        service.decide(&user(admin), campaign.id, true, None).await,
        Err(AppError::Conflict(_))
    ));

    assert!(matches!(
        service.decide(&user(outsider), campaign.id, true, None).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests reading a campaign without an MOU.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_mou_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, campaign) = factory::helpers::create_campaign_with_dependencies(db).await?;

    let result = MouService::new(db, APP_URL).get(campaign.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
