use super::*;

/// Tests storing a delivered piece of content.
///
/// Expected: Ok(Some) with status COMPLETED, `delivered_at` and the figures stored
#[tokio::test]
async fn stores_delivery() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, campaign, _, _, invitation) =
        factory::helpers::create_active_campaign_with_invitation(db, "ACCEPTED").await?;

    let repo = InvitationRepository::new(db);
    let delivered = repo
        .deliver(
            invitation.id,
            DeliverParam {
                content_url: "https://instagram.com/p/abc".to_string(),
                reach: 900,
                impressions: 1500,
                engagements: 45,
            },
        )
        .await?
        .unwrap();

    assert_eq!(delivered.status, InvitationStatus::Completed);
    assert!(delivered.delivered_at.is_some());
    assert_eq!(delivered.reach, 900);

    let figures = repo.campaign_figures(campaign.id).await?;
    assert_eq!(figures, vec![(InvitationStatus::Completed, 900, 1500, 45)]);

    Ok(())
}
