use super::*;

/// Tests accepting a PENDING invitation to an ACTIVE campaign.
///
/// Expected: ACCEPTED with responded_at set; the brand owner notified
#[tokio::test]
async fn accepts_and_notifies_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (brand_user, _, influencer_user, _, invitation) =
        factory::helpers::create_active_campaign_with_invitation(db, "PENDING").await?;

    let answered = InvitationService::new(db, APP_URL)
        .respond(influencer_user.id, invitation.id, true)
        .await?;

    assert_eq!(answered.status, InvitationStatus::Accepted);
    assert!(answered.responded_at.is_some());
    assert_eq!(
        NotificationRepository::new(db)
            .count_unread(brand_user.id)
            .await?,
        1
    );

    Ok(())
}

/// Tests answering twice.
///
/// Expected: the second answer is Err(Conflict)
#[tokio::test]
async fn second_answer_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, influencer_user, _, invitation) =
        factory::helpers::create_active_campaign_with_invitation(db, "PENDING").await?;
    let service = InvitationService::new(db, APP_URL);

    service
        .respond(influencer_user.id, invitation.id, false)
        .await?;
    let result = service.respond(influencer_user.id, invitation.id, true).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests answering somebody else's invitation.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn other_influencer_is_denied() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, _, invitation) =
        factory::helpers::create_active_campaign_with_invitation(db, "PENDING").await?;
    let (intruder, _) = factory::helpers::create_influencer_with_user(db).await?;

    let result = InvitationService::new(db, APP_URL)
        .respond(intruder.id, invitation.id, true)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests answering while the campaign is still awaiting approval.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn requires_active_campaign() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, campaign) = factory::helpers::create_campaign_with_dependencies(db).await?;
    let (influencer_user, influencer) = factory::helpers::create_influencer_with_user(db).await?;
    let invitation = factory::create_invitation(db, campaign.id, influencer.id).await?;

    let result = InvitationService::new(db, APP_URL)
        .respond(influencer_user.id, invitation.id, true)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
