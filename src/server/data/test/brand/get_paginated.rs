use super::*;

/// Tests filtering brands by status.
///
/// Expected: Ok with only the pending brand and a pending count of 1
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_brand_with_user(db).await?;
    let user = factory::create_brand_user(db).await?;
    let pending = factory::brand::BrandFactory::new(db, user.id)
        .status("PENDING")
        .build()
        .await?;

    let repo = BrandRepository::new(db);
    let (brands, total) = repo
        .get_paginated(Some(ProfileStatus::Pending), 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(brands[0].id, pending.id);
    assert_eq!(repo.count_by_status(ProfileStatus::Pending).await?, 1);

    let (_, all) = repo.get_paginated(None, 0, 10).await?;
    assert_eq!(all, 2);

    Ok(())
}
