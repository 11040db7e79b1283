use super::*;

/// Tests that the name check ignores case.
///
/// Expected: Ok(true) for a differently cased existing name
#[tokio::test]
async fn detects_name_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::CategoryFactory::new(db)
        .name("Fitness")
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    assert!(repo.name_taken("fITNESS", None).await?);
    assert!(!repo.name_taken("Travel", None).await?);

    Ok(())
}

/// Tests that a category may keep its own name when renamed.
///
/// Expected: Ok(false) when the match is the excluded category
#[tokio::test]
async fn ignores_excluded_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::CategoryFactory::new(db)
        .name("Food")
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    assert!(!repo.name_taken("food", Some(category.id)).await?);

    Ok(())
}
