use super::*;

fn category(name: &str) -> SaveCategoryParam {
    SaveCategoryParam {
        name: name.to_string(),
        description: None,
    }
}

/// Tests creating a category whose name differs only in case from an existing one.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_case_insensitive_duplicate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Category).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CategoryService::new(db);
    service.create(category("Beauty")).await?;

    assert!(matches!(
        service.create(category("beauty")).await,
        Err(AppError::Conflict(_))
    ));
    assert!(matches!(
        service.create(category("")).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests renaming a category to its own name in another case.
///
/// Expected: Ok; the category doesn't conflict with itself
#[tokio::test]
async fn update_may_keep_own_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Category).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CategoryService::new(db);
    let created = service.create(category("Travel")).await?;

    let updated = service.update(created.id, category("TRAVEL")).await?;

    assert_eq!(updated.name, "TRAVEL");
    assert!(matches!(
        service.update(999, category("Food")).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a category still used by an influencer.
///
/// Expected: Ok; deleting again is Err(NotFound)
#[tokio::test]
async fn deletes_category_in_use() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cat = factory::create_category(db).await?;
    let user = factory::create_influencer_user(db).await?;
    factory::influencer::InfluencerFactory::new(db, user.id)
        .category_id(cat.id)
        .build()
        .await?;

    let service = CategoryService::new(db);
    service.delete(cat.id).await?;

    assert!(matches!(
        service.delete(cat.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
