use super::*;

/// Tests creating an invitation and responding to it.
///
/// Expected: Ok with PENDING on creation, then ACCEPTED with `responded_at` set
#[tokio::test]
async fn creates_and_responds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, campaign) = factory::helpers::create_campaign_with_dependencies(db).await?;
    let (_, influencer) = factory::helpers::create_influencer_with_user(db).await?;

    let repo = InvitationRepository::new(db);
    let invitation = repo
        .create(campaign.id, influencer.id, Some("Join us".to_string()))
        .await?;

    assert_eq!(invitation.status, InvitationStatus::Pending);
    assert!(invitation.responded_at.is_none());

    let found = repo
        .find_by_campaign_and_influencer(campaign.id, influencer.id)
        .await?;
    assert_eq!(found.map(|i| i.id), Some(invitation.id));

    let responded = repo
        .respond(invitation.id, InvitationStatus::Accepted)
        .await?
        .unwrap();
    assert_eq!(responded.status, InvitationStatus::Accepted);
    assert!(responded.responded_at.is_some());

    Ok(())
}

/// Tests listing an influencer's invitations with pagination.
///
/// Expected: Ok with one invitation per page and total 2
#[tokio::test]
async fn paginates_by_influencer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, first) = factory::helpers::create_campaign_with_dependencies(db).await?;
    let (_, _, second) = factory::helpers::create_campaign_with_dependencies(db).await?;
    let (_, influencer) = factory::helpers::create_influencer_with_user(db).await?;
    factory::create_invitation(db, first.id, influencer.id).await?;
    factory::create_invitation(db, second.id, influencer.id).await?;

    let repo = InvitationRepository::new(db);
    let (page, total) = repo
        .get_by_influencer_paginated(influencer.id, 0, 1)
        .await?;

    assert_eq!(total, 2);
    assert_eq!(page.len(), 1);

    Ok(())
}
