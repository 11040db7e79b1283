use super::*;

/// Tests creating a user account.
///
/// Verifies that the repository stores the email, name, hash and role and leaves
/// the last login empty.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            email: "ana@example.com".to_string(),
            name: "Ana".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            role: UserRole::Brand,
        })
        .await?;

    assert_eq!(user.email, "ana@example.com");
    assert_eq!(user.role, UserRole::Brand);
    assert!(user.last_login_at.is_none());

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert_eq!(stored.unwrap().password_hash, "$argon2id$hash");

    Ok(())
}

/// Tests that a second account with the same email is rejected.
///
/// Expected: Err from the unique constraint
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            email: existing.email.clone(),
            name: "Copy".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Influencer,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
