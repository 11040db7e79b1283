use super::*;

/// Tests that samples carry the campaign end date.
///
/// Expected: Ok with one sample per invitation and the campaign's end date
#[tokio::test]
async fn pairs_invitations_with_end_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, campaign, _, influencer, _) =
        factory::helpers::create_active_campaign_with_invitation(db, "COMPLETED").await?;

    let (_, brand) = factory::helpers::create_brand_with_user(db).await?;
    let other = factory::campaign::CampaignFactory::new(db, brand.id)
        .end_date(Utc::now() + Duration::days(30))
        .build()
        .await?;
    factory::create_invitation(db, other.id, influencer.id).await?;

    let repo = InvitationRepository::new(db);
    let mut samples = repo.samples_for_influencer(influencer.id).await?;
    samples.sort_by_key(|s| s.campaign_end_date);

    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].campaign_end_date, campaign.end_date);
    assert_eq!(samples[0].status, InvitationStatus::Completed);
    assert_eq!(samples[1].status, InvitationStatus::Pending);

    Ok(())
}
