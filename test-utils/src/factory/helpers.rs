//! Shared helper utilities for factory methods.
//!
//! Provides unique ID generation and convenience methods for creating entities together
//! with the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values across all factories.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a brand user together with an approved brand profile.
///
/// # Returns
/// - `Ok((user, brand))` - The brand user and its profile
/// - `Err(DbErr)` - Database error during creation
pub async fn create_brand_with_user(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::brand::Model), DbErr> {
    let user = crate::factory::user::create_brand_user(db).await?;
    let brand = crate::factory::brand::create_brand(db, user.id).await?;

    Ok((user, brand))
}

/// Creates an influencer user together with an approved influencer profile.
///
/// # Returns
/// - `Ok((user, influencer))` - The influencer user and its profile
/// - `Err(DbErr)` - Database error during creation
pub async fn create_influencer_with_user(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::influencer::Model), DbErr> {
    let user = crate::factory::user::create_influencer_user(db).await?;
    let influencer = crate::factory::influencer::create_influencer(db, user.id).await?;

    Ok((user, influencer))
}

/// Creates a pending campaign with its owning brand and brand user.
///
/// # Returns
/// - `Ok((brand_user, brand, campaign))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_campaign_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::brand::Model,
        entity::campaign::Model,
    ),
    DbErr,
> {
    let (user, brand) = create_brand_with_user(db).await?;
    let campaign = crate::factory::campaign::create_campaign(db, brand.id).await?;

    Ok((user, brand, campaign))
}

/// Creates an active campaign with an influencer holding an invitation in the given status.
///
/// # Arguments
/// - `db` - Database connection
/// - `invitation_status` - Status of the created invitation (e.g. `"ACCEPTED"`)
///
/// # Returns
/// - `Ok((brand_user, campaign, influencer_user, influencer, invitation))`
/// - `Err(DbErr)` - Database error during creation
pub async fn create_active_campaign_with_invitation(
    db: &DatabaseConnection,
    invitation_status: &str,
) -> Result<
    (
        entity::user::Model,
        entity::campaign::Model,
        entity::user::Model,
        entity::influencer::Model,
        entity::campaign_invitation::Model,
    ),
    DbErr,
> {
    let (brand_user, brand) = create_brand_with_user(db).await?;
    let campaign = crate::factory::campaign::CampaignFactory::new(db, brand.id)
        .status("ACTIVE")
        .build()
        .await?;
    let (influencer_user, influencer) = create_influencer_with_user(db).await?;
    let invitation =
        crate::factory::invitation::InvitationFactory::new(db, campaign.id, influencer.id)
            .status(invitation_status)
            .build()
            .await?;

    Ok((brand_user, campaign, influencer_user, influencer, invitation))
}
