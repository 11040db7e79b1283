use super::*;

fn brand(name: &str) -> SaveBrandParam {
    SaveBrandParam {
        name: name.to_string(),
        description: None,
        website: Some("https://acme.example".to_string()),
        industry: Some("Apparel".to_string()),
    }
}

/// Tests submitting a brand profile.
///
/// Expected: PENDING profile, every admin notified with a link to the review page
#[tokio::test]
async fn create_notifies_admins() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let user = factory::create_brand_user(db).await?;

    let created = BrandService::new(db, APP_URL)
        .create(user.id, brand("Acme"))
        .await?;

    assert_eq!(created.status, ProfileStatus::Pending);

    let inbox = NotificationService::new(db, APP_URL)
        .list(admin.id, true, 0, 10)
        .await?;
    assert_eq!(inbox.total, 1);
    assert_eq!(
        inbox.items[0].link.as_deref(),
        Some("http://localhost:8080/admin/brands")
    );

    Ok(())
}

/// Tests submitting a second brand profile for the same user, or one without a name.
///
/// Expected: Err(Conflict), Err(BadRequest)
#[tokio::test]
async fn rejects_second_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = factory::helpers::create_brand_with_user(db).await?;
    let other = factory::create_brand_user(db).await?;
    let service = BrandService::new(db, APP_URL);

    assert!(matches!(
        service.create(user.id, brand("Acme again")).await,
        Err(AppError::Conflict(_))
    ));
    assert!(matches!(
        service.create(other.id, brand("  ")).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests editing a rejected brand profile.
///
/// Expected: the profile goes back to PENDING and admins are notified of the resubmission
#[tokio::test]
async fn editing_rejected_profile_resubmits() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let user = factory::create_brand_user(db).await?;
    factory::brand::BrandFactory::new(db, user.id)
        .status("REJECTED")
        .build()
        .await?;

    let updated = BrandService::new(db, APP_URL)
        .update_own(user.id, brand("Acme Outdoor"))
        .await?;

    assert_eq!(updated.name, "Acme Outdoor");
    assert_eq!(updated.status, ProfileStatus::Pending);

    let inbox = NotificationService::new(db, APP_URL)
        .list(admin.id, true, 0, 10)
        .await?;
    assert_eq!(inbox.total, 1);
    assert_eq!(inbox.items[0].title, "Brand profile resubmitted");

    Ok(())
}

/// Tests editing an approved brand profile.
///
/// Expected: the profile stays APPROVED and no admin is notified
#[tokio::test]
async fn editing_approved_profile_keeps_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let user = factory::create_brand_user(db).await?;
    factory::brand::BrandFactory::new(db, user.id)
        .status("APPROVED")
        .build()
        .await?;

    let updated = BrandService::new(db, APP_URL)
        .update_own(user.id, brand("Acme Outdoor"))
        .await?;

    assert_eq!(updated.status, ProfileStatus::Approved);
    assert_eq!(
        NotificationService::new(db, APP_URL)
            .unread_count(admin.id)
            .await?,
        0
    );

    Ok(())
}

/// Tests rejecting a brand with a reason.
///
/// Expected: REJECTED status, owner notified with the reason
#[tokio::test]
async fn review_notifies_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_campaign_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_brand_user(db).await?;
    let pending = factory::brand::BrandFactory::new(db, user.id)
        .status("PENDING")
        .build()
        .await?;

    let reviewed = BrandService::new(db, APP_URL)
        .review(pending.id, false, Some(" Missing website ".to_string()))
        .await?;

    assert_eq!(reviewed.status, ProfileStatus::Rejected);

    let inbox = NotificationService::new(db, APP_URL)
        .list(user.id, false, 0, 10)
        .await?;
    assert_eq!(inbox.total, 1);
    assert!(inbox.items[0].message.ends_with(": Missing website"));

    let pending_only = BrandService::new(db, APP_URL)
        .get_paginated(Some(ProfileStatus::Pending), 0, 10)
        .await?;
    assert_eq!(pending_only.total, 0);

    Ok(())
}
