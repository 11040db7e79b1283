//! Connected platform account repository.
//!
//! Each influencer holds at most one account per platform. Tokens are written here
//! but never leave the data layer: `PlatformAccount` carries only public profile data.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::{
    metrics::saturating_total,
    platform::{PlatformAccount, UpsertPlatformAccountParam},
};

pub struct PlatformAccountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlatformAccountRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or refreshes the influencer's account on a platform.
    ///
    /// An existing row keeps its `connected_at`; profile data and tokens are replaced.
    ///
    /// # Arguments
    /// - `param` - Influencer, platform, fetched profile and token set
    ///
    /// # Returns
    /// - `Ok(PlatformAccount)` - The stored account
    /// - `Err(DbErr)` - Database error, including a missing platform
    pub async fn upsert(&self, param: UpsertPlatformAccountParam) -> Result<PlatformAccount, DbErr> {
        let platform = entity::prelude::Platform::find_by_id(param.platform_id)
            .one(self.db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("Platform {} not found", param.platform_id))
            })?;

        let existing = entity::prelude::PlatformAccount::find()
            .filter(entity::platform_account::Column::InfluencerId.eq(param.influencer_id))
            .filter(entity::platform_account::Column::PlatformId.eq(param.platform_id))
            .one(self.db)
            .await?;

        let now = Utc::now();
        let entity = match existing {
            Some(existing) => {
                let mut active = existing.into_active_model();
                active.external_id = ActiveValue::Set(param.profile.external_id);
                active.username = ActiveValue::Set(param.profile.username);
                active.followers_count = ActiveValue::Set(param.profile.followers_count);
                active.access_token = ActiveValue::Set(param.access_token);
                active.refresh_token = ActiveValue::Set(param.refresh_token);
                active.token_expires_at = ActiveValue::Set(param.token_expires_at);
                active.updated_at = ActiveValue::Set(now);
                active.update(self.db).await?
            }
            None => {
                entity::platform_account::ActiveModel {
                    influencer_id: ActiveValue::Set(param.influencer_id),
                    platform_id: ActiveValue::Set(param.platform_id),
                    external_id: ActiveValue::Set(param.profile.external_id),
                    username: ActiveValue::Set(param.profile.username),
                    access_token: ActiveValue::Set(param.access_token),
                    refresh_token: ActiveValue::Set(param.refresh_token),
                    token_expires_at: ActiveValue::Set(param.token_expires_at),
                    followers_count: ActiveValue::Set(param.profile.followers_count),
                    connected_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(PlatformAccount::from_entity(entity, &platform))
    }

    /// Gets the influencer's connected accounts ordered by platform.
    pub async fn get_by_influencer(
        &self,
        influencer_id: i32,
    ) -> Result<Vec<PlatformAccount>, DbErr> {
        let rows = entity::prelude::PlatformAccount::find()
            .filter(entity::platform_account::Column::InfluencerId.eq(influencer_id))
            .find_also_related(entity::prelude::Platform)
            .order_by_asc(entity::platform_account::Column::PlatformId)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(account, platform)| {
                let platform = platform.ok_or_else(|| {
                    DbErr::RecordNotFound(format!("Platform {} not found", account.platform_id))
                })?;
                Ok(PlatformAccount::from_entity(account, &platform))
            })
            .collect()
    }

    /// Removes the influencer's account on a platform.
    ///
    /// # Returns
    /// - `Ok(true)` - Account removed
    /// - `Ok(false)` - The platform was not connected
    pub async fn delete(&self, influencer_id: i32, platform_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PlatformAccount::delete_many()
            .filter(entity::platform_account::Column::InfluencerId.eq(influencer_id))
            .filter(entity::platform_account::Column::PlatformId.eq(platform_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sums follower counts across the influencer's connected accounts.
    pub async fn total_followers(&self, influencer_id: i32) -> Result<i64, DbErr> {
        let accounts = entity::prelude::PlatformAccount::find()
            .filter(entity::platform_account::Column::InfluencerId.eq(influencer_id))
            .all(self.db)
            .await?;

        Ok(saturating_total(accounts.iter().map(|a| a.followers_count)))
    }
}
