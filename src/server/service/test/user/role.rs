use super::*;

/// Tests promoting an influencer to admin.
///
/// Expected: Ok with the new role persisted
#[tokio::test]
async fn updates_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_influencer_user(db).await?;
    let service = UserService::new(db);

    let updated = service.update_role(user.id, UserRole::Admin).await?;

    assert_eq!(updated.role, UserRole::Admin);
    assert_eq!(service.get(user.id).await?.role, UserRole::Admin);

    Ok(())
}

/// Tests changing the role of a user that doesn't exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn update_role_of_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db).update_role(42, UserRole::Brand).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests paging through users.
///
/// Expected: page size respected, total counts every user
#[tokio::test]
async fn paginates_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_user(db).await?;
    }

    let page = UserService::new(db).get_paginated(0, 2).await?;

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 3);

    Ok(())
}
