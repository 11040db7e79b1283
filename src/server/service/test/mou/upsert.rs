use super::*;

/// Tests attaching an MOU to a campaign with an accepted influencer.
///
/// Expected: PENDING with admin, brand and influencer pending; each of them notified
#[tokio::test]
async fn creates_mou_and_notifies_parties() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let (brand_user, campaign, influencer_user, _, _) =
        factory::helpers::create_active_campaign_with_invitation(db, "ACCEPTED").await?;

    let (mou, pending) = MouService::new(db, APP_URL)
        .upsert(campaign.id, "  Content agreement ", DOCUMENT_URL)
        .await?;

    assert_eq!(mou.title, "Content agreement");
    assert_eq!(mou.status, MouStatus::Pending);
    assert_eq!(
        pending.iter().map(|p| p.party).collect::<Vec<_>>(),
        vec![MouParty::Admin, MouParty::Brand, MouParty::Influencer]
    );

    let notifications = NotificationRepository::new(db);
    for id in [admin.id, brand_user.id, influencer_user.id] {
        assert_eq!(notifications.count_unread(id).await?, 1);
    }

    Ok(())
}

/// Tests replacing the document after a decision was recorded.
///
/// Expected: approvals cleared and status back to PENDING
#[tokio::test]
async fn replacing_document_clears_decisions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let (_, _, campaign) = factory::helpers::create_campaign_with_dependencies(db).await?;
    let service = MouService::new(db, APP_URL);

    service.upsert(campaign.id, "v1", DOCUMENT_URL).await?;
    service.decide(&user(admin), campaign.id, true, None).await?;

    let (mou, _) = service
        .upsert(campaign.id, "v2", "https://docs.example.com/mou-v2.pdf")
        .await?;

    assert_eq!(mou.title, "v2");
    assert!(mou.approvals.is_empty());
    assert_eq!(mou.status, MouStatus::Pending);

    Ok(())
}

/// Tests invalid MOU input.
///
/// Expected: Err(BadRequest) for a blank title and a malformed URL
#[tokio::test]
async fn validates_title_and_url() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, campaign) = factory::helpers::create_campaign_with_dependencies(db).await?;
    let service = MouService::new(db, APP_URL);

    assert!(matches!(
        service.upsert(campaign.id, " ", DOCUMENT_URL).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.upsert(campaign.id, "Agreement", "mou.pdf").await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
