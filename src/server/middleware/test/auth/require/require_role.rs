use super::*;
use crate::model::status::UserRole;

/// Tests that each role permission admits exactly that role.
///
/// Expected: Ok for the matching role
#[tokio::test]
async fn grants_matching_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let brand_user = factory::create_brand_user(db).await?;
    AuthSession::new(session).set_user_id(brand_user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Brand])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that an influencer is denied the admin permission.
///
/// Expected: Err(AuthError::AccessDenied) naming the required role
#[tokio::test]
async fn denies_other_roles() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_influencer_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(id, message))) => {
            assert_eq!(id, user.id);
            assert!(message.contains("ADMIN"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    Ok(())
}

/// Tests that admins don't pass brand-only checks.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn admin_is_not_a_brand() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Brand])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests a permission accepting several roles.
///
/// Expected: Ok for a listed role, Err(AccessDenied) otherwise
#[tokio::test]
async fn any_role_accepts_listed_roles() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    const STAFF: &[UserRole] = &[UserRole::Admin, UserRole::Brand];

    let brand = factory::create_brand_user(db).await?;
    AuthSession::new(session).set_user_id(brand.id).await?;
    AuthGuard::new(db, session)
        .require(&[Permission::AnyRole(STAFF)])
        .await?;

    let influencer = factory::create_influencer_user(db).await?;
    AuthSession::new(session).set_user_id(influencer.id).await?;
    let result = AuthGuard::new(db, session)
        .require(&[Permission::AnyRole(STAFF)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
