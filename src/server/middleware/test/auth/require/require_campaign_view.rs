use super::*;

/// Tests that an invited influencer can view the campaign.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_invited_influencer() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_, campaign, influencer_user, _, _) =
        factory::helpers::create_active_campaign_with_invitation(db, "PENDING").await?;
    AuthSession::new(session)
        .set_user_id(influencer_user.id)
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::CampaignView(campaign.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that an influencer without an invitation is denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_uninvited_influencer() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_, _, campaign) = factory::helpers::create_campaign_with_dependencies(db).await?;
    let (influencer_user, _) = factory::helpers::create_influencer_with_user(db).await?;
    AuthSession::new(session)
        .set_user_id(influencer_user.id)
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::CampaignView(campaign.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that view and owner checks combine: an invited influencer can't manage.
///
/// Expected: Err(AuthError::AccessDenied) from the owner check
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_, campaign, influencer_user, _, _) =
        factory::helpers::create_active_campaign_with_invitation(db, "ACCEPTED").await?;
    AuthSession::new(session)
        .set_user_id(influencer_user.id)
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[
            Permission::CampaignView(campaign.id),
            Permission::CampaignOwner(campaign.id),
        ])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(_, message))) => {
            assert!(message.contains("doesn't own"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    Ok(())
}
