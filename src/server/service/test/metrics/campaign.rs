use super::*;

/// Tests aggregating a campaign's invitations.
///
/// Expected: counts per status and summed figures
#[tokio::test]
async fn aggregates_invitations() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, campaign, _, _, _) =
        factory::helpers::create_active_campaign_with_invitation(db, "ACCEPTED").await?;
    let (_, finished) = factory::helpers::create_influencer_with_user(db).await?;
    factory::invitation::InvitationFactory::new(db, campaign.id, finished.id)
        .delivered(Utc::now(), 1000, 4000, 80)
        .build()
        .await?;

    let metrics = MetricsService::new(db).campaign(campaign.id).await?;

    assert_eq!(metrics.invited, 2);
    assert_eq!(metrics.accepted, 1);
    assert_eq!(metrics.completed, 1);
    assert_eq!(metrics.total_reach, 1000);
    assert_eq!(metrics.total_impressions, 4000);
    assert_eq!(metrics.engagement_rate, 8.0);
    assert_eq!(metrics.completion_rate, 50.0);

    Ok(())
}
