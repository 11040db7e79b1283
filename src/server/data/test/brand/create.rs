use super::*;

/// Tests creating a brand profile.
///
/// Expected: Ok with status PENDING and the profile findable by user
#[tokio::test]
async fn creates_pending_brand() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_brand_user(db).await?;

    let repo = BrandRepository::new(db);
    let brand = repo.create(user.id, param("Northwind")).await?;

    assert_eq!(brand.status, ProfileStatus::Pending);
    assert_eq!(brand.industry.as_deref(), Some("Retail"));

    let found = repo.find_by_user_id(user.id).await?;
    assert_eq!(found.map(|b| b.id), Some(brand.id));

    Ok(())
}
