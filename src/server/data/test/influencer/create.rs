use super::*;

/// Tests creating an influencer profile with a category.
///
/// Expected: Ok with status PENDING and the category kept
#[tokio::test]
async fn creates_pending_influencer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_influencer_user(db).await?;
    let category = factory::create_category(db).await?;

    let repo = InfluencerRepository::new(db);
    let influencer = repo
        .create(
            user.id,
            SaveInfluencerParam {
                display_name: "Trail Runner".to_string(),
                bio: None,
                country: Some("PT".to_string()),
                category_id: Some(category.id),
            },
        )
        .await?;

    assert_eq!(influencer.status, ProfileStatus::Pending);
    assert_eq!(influencer.category_id, Some(category.id));
    assert_eq!(influencer.user_id, user.id);

    Ok(())
}
