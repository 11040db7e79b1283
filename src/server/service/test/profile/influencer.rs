use super::*;

fn influencer(category_id: Option<i32>) -> SaveInfluencerParam {
    SaveInfluencerParam {
        display_name: "Jamie Travels".to_string(),
        bio: Some("Slow travel and food".to_string()),
        country: Some("NL".to_string()),
        category_id,
    }
}

/// Tests submitting an influencer profile with an unknown category.
///
/// Expected: Err(BadRequest), nothing created
#[tokio::test]
async fn rejects_unknown_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_influencer_user(db).await?;
    let service = InfluencerService::new(db, APP_URL);

    assert!(matches!(
        service.create(user.id, influencer(Some(77))).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.get_own(user.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests submitting an influencer profile twice.
///
/// Expected: first is PENDING, second is Err(Conflict)
#[tokio::test]
async fn rejects_second_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_influencer_user(db).await?;
    let category = factory::create_category(db).await?;
    let service = InfluencerService::new(db, APP_URL);

    let created = service.create(user.id, influencer(Some(category.id))).await?;
    assert_eq!(created.status, ProfileStatus::Pending);
    assert_eq!(created.category_id, Some(category.id));

    assert!(matches!(
        service.create(user.id, influencer(None)).await,
        Err(AppError::Conflict(_))
    ));

    Ok(())
}

/// Tests browsing influencers as a brand.
///
/// Expected: only approved influencers, narrowed by category when given
#[tokio::test]
async fn browse_lists_only_approved() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let food = factory::create_category(db).await?;

    let approved = factory::create_influencer_user(db).await?;
    let approved = factory::influencer::InfluencerFactory::new(db, approved.id)
        .category_id(food.id)
        .build()
        .await?;
    factory::helpers::create_influencer_with_user(db).await?;
    let pending = factory::create_influencer_user(db).await?;
    factory::influencer::InfluencerFactory::new(db, pending.id)
        .category_id(food.id)
        .status("PENDING")
        .build()
        .await?;

    let service = InfluencerService::new(db, APP_URL);

    assert_eq!(service.browse(None, 0, 10).await?.total, 2);

    let in_food = service.browse(Some(food.id), 0, 10).await?;
    assert_eq!(in_food.total, 1);
    assert_eq!(in_food.items[0].id, approved.id);

    Ok(())
}

/// Tests approving an influencer profile that doesn't exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn review_missing_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = InfluencerService::new(db, APP_URL)
        .review(5, true, None)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests editing a rejected influencer profile.
///
/// Expected: the profile goes back to PENDING and admins are notified of the resubmission
#[tokio::test]
async fn editing_rejected_profile_notifies_admins() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let user = factory::create_influencer_user(db).await?;
    factory::influencer::InfluencerFactory::new(db, user.id)
        .status("REJECTED")
        .build()
        .await?;

    let updated = InfluencerService::new(db, APP_URL)
        .update_own(user.id, influencer(None))
        .await?;

    assert_eq!(updated.status, ProfileStatus::Pending);

    let inbox = NotificationService::new(db, APP_URL)
        .list(admin.id, true, 0, 10)
        .await?;
    assert_eq!(inbox.total, 1);
    assert_eq!(inbox.items[0].title, "Influencer profile resubmitted");
    assert_eq!(
        inbox.items[0].link.as_deref(),
        Some("http://localhost:8080/admin/influencers")
    );

    Ok(())
}
