use super::*;

/// Tests storing a notification and listing unread ones.
///
/// Expected: Ok with the notification unread and listed newest first
#[tokio::test]
async fn creates_unread_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let older = factory::create_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);
    let content = NotificationContent::new(
        NotificationKind::CampaignApproved,
        "Campaign approved",
        "Spring launch is now active",
    )
    .link("/brand/campaigns/1");
    let created = repo.create(user.id, &content).await?;

    assert!(!created.read);
    assert_eq!(created.kind, "campaign_approved");
    assert_eq!(created.link.as_deref(), Some("/brand/campaigns/1"));

    let (items, total) = repo.get_paginated(user.id, true, 0, 10).await?;
    assert_eq!(total, 2);
    assert_eq!(items[0].id, created.id);
    assert_eq!(items[1].id, older.id);

    Ok(())
}
