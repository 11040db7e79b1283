use super::*;

/// Tests approving a PENDING campaign.
///
/// Expected: Ok with status ACTIVE and the brand owner notified
#[tokio::test]
async fn approve_activates_and_notifies_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (brand_user, _, campaign) =
        factory::helpers::create_campaign_with_dependencies(db).await?;

    let approved = CampaignService::new(db, APP_URL).approve(campaign.id).await?;

    assert_eq!(approved.status, CampaignStatus::Active);
    assert_eq!(unread(db, brand_user.id).await, 1);

    Ok(())
}

/// Tests approving an already ACTIVE campaign.
///
/// Expected: Err(Conflict) and the status unchanged
#[tokio::test]
async fn approve_twice_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, campaign) = factory::helpers::create_campaign_with_dependencies(db).await?;
    let service = CampaignService::new(db, APP_URL);

    service.approve(campaign.id).await?;
    let result = service.approve(campaign.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests rejecting with a blank reason and then with a reason.
///
/// Expected: BadRequest first, then REJECTED with the trimmed reason stored
#[tokio::test]
async fn reject_requires_reason() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, campaign) = factory::helpers::create_campaign_with_dependencies(db).await?;
    let service = CampaignService::new(db, APP_URL);

    assert!(matches!(
        service.reject(campaign.id, "  ").await,
        Err(AppError::BadRequest(_))
    ));

    let rejected = service.reject(campaign.id, " Off-brand ").await?;
    assert_eq!(rejected.status, CampaignStatus::Rejected);
    assert_eq!(rejected.rejection_reason.as_deref(), Some("Off-brand"));

    Ok(())
}

/// Tests moving out of terminal states.
///
/// Expected: Err(Conflict) for cancel after rejection and for completing a PENDING campaign
#[tokio::test]
async fn terminal_and_skipped_transitions_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, brand) = factory::helpers::create_brand_with_user(db).await?;
    let pending = factory::create_campaign(db, brand.id).await?;
    let rejected = factory::campaign::CampaignFactory::new(db, brand.id)
        .status("REJECTED")
        .build()
        .await?;
    let service = CampaignService::new(db, APP_URL);

    assert!(matches!(
        service.complete(pending.id).await,
        Err(AppError::Conflict(_))
    ));
    assert!(matches!(
        service.cancel(rejected.id).await,
        Err(AppError::Conflict(_))
    ));

    Ok(())
}

/// Tests cancelling an ACTIVE campaign with an accepted invitee.
///
/// Expected: Ok with status CANCELLED; owner and invitee notified
#[tokio::test]
async fn cancel_notifies_participants() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (brand_user, campaign, influencer_user, _, _) =
        factory::helpers::create_active_campaign_with_invitation(db, "ACCEPTED").await?;

    let cancelled = CampaignService::new(db, APP_URL).cancel(campaign.id).await?;

    assert_eq!(cancelled.status, CampaignStatus::Cancelled);
    assert_eq!(unread(db, brand_user.id).await, 1);
    assert_eq!(unread(db, influencer_user.id).await, 1);

    Ok(())
}

/// Tests unknown campaign IDs.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_campaign_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CampaignService::new(db, APP_URL).approve(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
