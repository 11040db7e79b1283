use super::*;

/// Tests rejecting a campaign with a reason.
///
/// Expected: Ok(Some) with status REJECTED and the reason stored
#[tokio::test]
async fn stores_status_and_reason() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (brand_user, _, campaign) =
        factory::helpers::create_campaign_with_dependencies(db).await?;

    let repo = CampaignRepository::new(db);
    let updated = repo
        .set_status(
            campaign.id,
            CampaignStatus::Rejected,
            Some("Budget too low".to_string()),
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, CampaignStatus::Rejected);
    assert_eq!(updated.rejection_reason.as_deref(), Some("Budget too low"));
    assert_eq!(repo.owner_user_id(campaign.id).await?, Some(brand_user.id));
    assert_eq!(repo.owner_user_id(999).await?, None);

    Ok(())
}
