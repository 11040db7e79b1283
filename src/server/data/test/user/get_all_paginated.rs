use super::*;

/// Tests paginating users ordered by name.
///
/// Verifies that the first page holds the alphabetically first users and that the
/// total counts every user.
///
/// Expected: Ok with 2 users on page 0 and total 3
#[tokio::test]
async fn paginates_users_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).name("Carla").build().await?;
    factory::user::UserFactory::new(db).name("Alice").build().await?;
    factory::user::UserFactory::new(db).name("Bruno").build().await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(0, 2).await?;

    assert_eq!(total, 3);
    let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bruno"]);

    let (second, _) = repo.get_all_paginated(1, 2).await?;
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].name, "Carla");

    Ok(())
}
