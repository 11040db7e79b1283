use super::*;

/// Tests fanning out to three users, one of whom doesn't exist.
///
/// Expected: Ok(2) with the link prefixed by the application URL; the missing
/// recipient is skipped instead of failing the rest
#[tokio::test]
async fn creates_one_row_per_recipient() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    // SQLite only enforces the user foreign key when asked to
    sea_orm::ConnectionTrait::execute_unprepared(db, "PRAGMA foreign_keys = ON").await?;

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let service = NotificationService::new(db, APP_URL);

    let created = service
        .fan_out(&[first.id, 9999, second.id], &content())
        .await;

    assert_eq!(created, 2);

    let page = service.list(second.id, false, 0, 10).await?;
    assert_eq!(page.total, 1);
    assert_eq!(
        page.items[0].link.as_deref(),
        Some("http://localhost:8080/campaigns/1")
    );
    assert_eq!(page.items[0].kind, "campaign_completed");

    Ok(())
}

/// Tests notifying admins when there are none.
///
/// Expected: Ok(0)
#[tokio::test]
async fn notify_admins_without_admins() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_brand_user(db).await?;

    let created = NotificationService::new(db, APP_URL)
        .notify_admins(&content())
        .await?;

    assert_eq!(created, 0);

    Ok(())
}
