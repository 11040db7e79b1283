use super::*;

/// Tests that replacing the document resets status and approvals.
///
/// Expected: Ok with the same MOU, status PENDING and no approvals
#[tokio::test]
async fn replacing_document_resets_approvals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (brand_user, _, campaign) =
        factory::helpers::create_campaign_with_dependencies(db).await?;

    let repo = MouRepository::new(db);
    let mou = repo
        .upsert(
            campaign.id,
            "Agreement".to_string(),
            "https://docs.example.com/v1".to_string(),
        )
        .await?;
    repo.add_approval(
        mou.id,
        brand_user.id,
        MouParty::Brand,
        MouDecision::Rejected,
        None,
    )
    .await?;
    repo.set_status(mou.id, MouStatus::Rejected).await?;

    let replaced = repo
        .upsert(
            campaign.id,
            "Agreement v2".to_string(),
            "https://docs.example.com/v2".to_string(),
        )
        .await?;

    assert_eq!(replaced.id, mou.id);
    assert_eq!(replaced.status, MouStatus::Pending);

    let reloaded = repo.find_by_campaign(campaign.id).await?.unwrap();
    assert!(reloaded.approvals.is_empty());
    assert_eq!(reloaded.document_url, "https://docs.example.com/v2");

    Ok(())
}
