use super::*;

/// Tests an admin deleting their own account.
///
/// Expected: Err(BadRequest), the account remains
#[tokio::test]
async fn cannot_delete_self() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let service = UserService::new(db);

    let result = service.delete(admin.id, admin.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.get(admin.id).await?.id, admin.id);

    Ok(())
}

/// Tests deleting another user, then deleting them again.
///
/// Expected: Ok, then Err(NotFound)
#[tokio::test]
async fn deletes_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let brand_user = factory::create_brand_user(db).await?;
    let service = UserService::new(db);

    service.delete(admin.id, brand_user.id).await?;

    assert!(matches!(
        service.get(brand_user.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.delete(admin.id, brand_user.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
