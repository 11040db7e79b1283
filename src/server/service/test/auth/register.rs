use super::*;

/// Tests registering a brand user.
///
/// Expected: Ok with the email trimmed and lower-cased and the role stored
#[tokio::test]
async fn registers_with_normalized_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();

    let user = AuthService::new(db, &codes)
        .register(register_param("  Ana@Example.COM ", UserRole::Brand))
        .await?;

    assert_eq!(user.email, "ana@example.com");
    assert_eq!(user.role, UserRole::Brand);

    Ok(())
}

/// Tests registering twice with the same email in different case.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();
    let service = AuthService::new(db, &codes);

    service
        .register(register_param("ana@example.com", UserRole::Brand))
        .await?;
    let result = service
        .register(register_param("ANA@example.com", UserRole::Influencer))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests the field validation.
///
/// Expected: Err(BadRequest) for a missing '@', an empty name and a short password
#[tokio::test]
async fn validates_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();
    let service = AuthService::new(db, &codes);

    let result = service
        .register(register_param("ana.example.com", UserRole::Brand))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let mut param = register_param("ana@example.com", UserRole::Brand);
    param.name = "   ".to_string();
    assert!(matches!(
        service.register(param).await,
        Err(AppError::BadRequest(_))
    ));

    let mut param = register_param("ana@example.com", UserRole::Brand);
    param.password = "short".to_string();
    assert!(matches!(
        service.register(param).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests registering an admin without a code.
///
/// Expected: Err(AccessDenied) and no account created
#[tokio::test]
async fn admin_requires_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();
    codes.issue().await;

    let result = AuthService::new(db, &codes)
        .register(register_param("root@example.com", UserRole::Admin))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests registering an admin with the issued code, then reusing it.
///
/// Expected: first registration Ok as ADMIN, second Err(AccessDenied)
#[tokio::test]
async fn admin_code_is_single_use() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();
    let code = codes.issue().await;
    let service = AuthService::new(db, &codes);

    let mut param = register_param("root@example.com", UserRole::Admin);
    param.admin_code = Some(code.clone());
    let admin = service.register(param).await?;
    assert_eq!(admin.role, UserRole::Admin);

    let mut param = register_param("root2@example.com", UserRole::Admin);
    param.admin_code = Some(code);
    assert!(matches!(
        service.register(param).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that a duplicate email is reported before the admin code is consumed.
///
/// Expected: Err(Conflict) and the code still claimable afterwards
#[tokio::test]
async fn duplicate_email_keeps_admin_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .email("root@example.com")
        .build()
        .await?;
    let codes = AdminCodeService::new();
    let code = codes.issue().await;

    let mut param = register_param("root@example.com", UserRole::Admin);
    param.admin_code = Some(code.clone());
    let result = AuthService::new(db, &codes).register(param).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(codes.claim(&code).await.is_some());

    Ok(())
}

/// Tests an admin registration whose insert fails after the code was claimed.
///
/// Expected: the insert error is returned and the code can be used again
#[tokio::test]
async fn failed_insert_restores_admin_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    sea_orm::ConnectionTrait::execute_unprepared(
        db,
        "CREATE TRIGGER block_user_insert BEFORE INSERT ON \"user\" \
         BEGIN SELECT RAISE(ABORT, 'insert blocked'); END",
    )
    .await?;
    let codes = AdminCodeService::new();
    let code = codes.issue().await;

    let mut param = register_param("root@example.com", UserRole::Admin);
    param.admin_code = Some(code.clone());
    let result = AuthService::new(db, &codes).register(param).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert!(codes.claim(&code).await.is_some());

    Ok(())
}
