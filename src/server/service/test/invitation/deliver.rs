use super::*;

fn deliverable() -> DeliverParam {
    DeliverParam {
        content_url: "https://instagram.com/p/abc123".to_string(),
        reach: 12000,
        impressions: 30000,
        engagements: 900,
    }
}

/// Tests delivering on an accepted invitation.
///
/// Expected: COMPLETED with delivered_at and figures stored; the owner notified
#[tokio::test]
async fn delivers_accepted_invitation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (brand_user, _, influencer_user, _, invitation) =
        factory::helpers::create_active_campaign_with_invitation(db, "ACCEPTED").await?;

    let delivered = InvitationService::new(db, APP_URL)
        .deliver(influencer_user.id, invitation.id, deliverable())
        .await?;

    assert_eq!(delivered.status, InvitationStatus::Completed);
    assert!(delivered.delivered_at.is_some());
    assert_eq!(delivered.reach, 12000);
    assert_eq!(delivered.engagements, 900);
    assert_eq!(
        NotificationRepository::new(db)
            .count_unread(brand_user.id)
            .await?,
        1
    );

    Ok(())
}

/// Tests delivering before accepting.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn requires_accepted_invitation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, influencer_user, _, invitation) =
        factory::helpers::create_active_campaign_with_invitation(db, "PENDING").await?;

    let result = InvitationService::new(db, APP_URL)
        .deliver(influencer_user.id, invitation.id, deliverable())
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests delivering negative figures.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_negative_figures() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, influencer_user, _, invitation) =
        factory::helpers::create_active_campaign_with_invitation(db, "ACCEPTED").await?;

    let mut param = deliverable();
    param.reach = -5;
    let result = InvitationService::new(db, APP_URL)
        .deliver(influencer_user.id, invitation.id, param)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
