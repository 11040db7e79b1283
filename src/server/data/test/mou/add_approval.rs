use super::*;

/// Tests recording decisions and reading them back in order.
///
/// Expected: Ok with both approvals attached to the MOU
#[tokio::test]
async fn records_decisions_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let (brand_user, _, campaign) =
        factory::helpers::create_campaign_with_dependencies(db).await?;

    let repo = MouRepository::new(db);
    let mou = repo
        .upsert(
            campaign.id,
            "Agreement".to_string(),
            "https://docs.example.com/mou".to_string(),
        )
        .await?;

    repo.add_approval(
        mou.id,
        admin.id,
        MouParty::Admin,
        MouDecision::Approved,
        Some("Looks fine".to_string()),
    )
    .await?;
    repo.add_approval(
        mou.id,
        brand_user.id,
        MouParty::Brand,
        MouDecision::Approved,
        None,
    )
    .await?;

    let reloaded = repo.find_by_campaign(campaign.id).await?.unwrap();
    let parties: Vec<_> = reloaded.approvals.iter().map(|a| a.party).collect();
    assert_eq!(parties, vec![MouParty::Admin, MouParty::Brand]);
    assert_eq!(reloaded.approvals[0].comment.as_deref(), Some("Looks fine"));

    assert!(repo.find_by_campaign(999).await?.is_none());

    Ok(())
}
