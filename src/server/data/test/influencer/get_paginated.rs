use super::*;

/// Tests browsing approved influencers of one category.
///
/// Expected: Ok with only the approved influencer in the category
#[tokio::test]
async fn filters_by_status_and_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let user = factory::create_influencer_user(db).await?;
    let matching = factory::influencer::InfluencerFactory::new(db, user.id)
        .category_id(category.id)
        .build()
        .await?;

    let user = factory::create_influencer_user(db).await?;
    factory::influencer::InfluencerFactory::new(db, user.id)
        .category_id(category.id)
        .status("PENDING")
        .build()
        .await?;

    factory::helpers::create_influencer_with_user(db).await?;

    let repo = InfluencerRepository::new(db);
    let (influencers, total) = repo
        .get_paginated(Some(ProfileStatus::Approved), Some(category.id), 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(influencers[0].id, matching.id);

    Ok(())
}
