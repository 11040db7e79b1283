use super::*;

/// Tests updating a brand profile together with its status.
///
/// Expected: Ok(Some) with new fields and the given status
#[tokio::test]
async fn updates_fields_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, brand) = factory::helpers::create_brand_with_user(db).await?;

    let repo = BrandRepository::new(db);
    let updated = repo
        .update(brand.id, param("Renamed"), ProfileStatus::Pending)
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.status, ProfileStatus::Pending);

    Ok(())
}

/// Tests setting the review status of a brand.
///
/// Expected: Ok(Some) with status REJECTED
#[tokio::test]
async fn sets_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, brand) = factory::helpers::create_brand_with_user(db).await?;

    let repo = BrandRepository::new(db);
    let updated = repo
        .set_status(brand.id, ProfileStatus::Rejected)
        .await?
        .unwrap();

    assert_eq!(updated.status, ProfileStatus::Rejected);

    Ok(())
}
