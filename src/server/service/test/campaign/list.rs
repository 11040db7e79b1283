use super::*;

/// Tests the listing scope per role.
///
/// Expected: admin sees both campaigns, each brand its own, the influencer the one
/// it was invited to
#[tokio::test]
async fn scopes_listing_by_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let (brand_user, campaign) = {
        let (u, _, c) = factory::helpers::create_campaign_with_dependencies(db).await?;
        (u, c)
    };
    let (other_brand_user, _, _) = factory::helpers::create_campaign_with_dependencies(db).await?;
    let (influencer_user, influencer) = factory::helpers::create_influencer_with_user(db).await?;
    factory::create_invitation(db, campaign.id, influencer.id).await?;

    let service = CampaignService::new(db, APP_URL);

    let all = service.get_paginated(&user(admin), None, 0, 10).await?;
    assert_eq!(all.total, 2);

    let own = service.get_paginated(&user(brand_user), None, 0, 10).await?;
    assert_eq!(own.total, 1);
    assert_eq!(own.items[0].id, campaign.id);

    let other = service
        .get_paginated(&user(other_brand_user), None, 0, 10)
        .await?;
    assert_eq!(other.total, 1);
    assert_ne!(other.items[0].id, campaign.id);

    let invited = service
        .get_paginated(&user(influencer_user), None, 0, 10)
        .await?;
    assert_eq!(invited.total, 1);
    assert_eq!(invited.items[0].id, campaign.id);

    Ok(())
}

/// Tests listing for a brand user who hasn't onboarded yet.
///
/// Expected: an empty page
#[tokio::test]
async fn user_without_profile_gets_empty_page() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_campaign_with_dependencies(db).await?;
    let newcomer = factory::create_brand_user(db).await?;

    let page = CampaignService::new(db, APP_URL)
        .get_paginated(&user(newcomer), Some(CampaignStatus::Pending), 0, 10)
        .await?;

    assert_eq!(page.total, 0);
    assert!(page.items.is_empty());

    Ok(())
}
