use super::*;

/// Tests loading several influencers by ID, ignoring unknown IDs.
///
/// Expected: Ok with the two existing influencers
#[tokio::test]
async fn skips_missing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first) = factory::helpers::create_influencer_with_user(db).await?;
    let (_, second) = factory::helpers::create_influencer_with_user(db).await?;

    let repo = InfluencerRepository::new(db);
    let found = repo.find_by_ids(&[first.id, second.id, 999]).await?;

    assert_eq!(found.len(), 2);
    assert!(repo.find_by_ids(&[]).await?.is_empty());

    Ok(())
}
