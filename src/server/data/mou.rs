//! MOU repository.
//!
//! One MOU per campaign. Approvals belong to the current document: replacing the
//! document deletes them.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::status::{MouDecision, MouParty, MouStatus},
    server::model::mou::{Mou, MouApproval},
};

pub struct MouRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MouRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the campaign's MOU with its approvals in decision order.
    pub async fn find_by_campaign(&self, campaign_id: i32) -> Result<Option<Mou>, DbErr> {
        let Some(entity) = entity::prelude::Mou::find()
            .filter(entity::mou::Column::CampaignId.eq(campaign_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let approvals = self.approvals(entity.id).await?;

        Mou::from_entity(entity, approvals).map(Some)
    }

    /// Creates the campaign's MOU or replaces its document.
    ///
    /// Either way the MOU ends up PENDING with no approvals.
    ///
    /// # Arguments
    /// - `campaign_id` - Campaign the MOU belongs to
    /// - `title` - Document title
    /// - `document_url` - Location of the document
    ///
    /// # Returns
    /// - `Ok(Mou)` - The stored MOU
    /// - `Err(DbErr)` - Database error during write
    pub async fn upsert(
        &self,
        campaign_id: i32,
        title: String,
        document_url: String,
    ) -> Result<Mou, DbErr> {
        let existing = entity::prelude::Mou::find()
            .filter(entity::mou::Column::CampaignId.eq(campaign_id))
            .one(self.db)
            .await?;

        let now = Utc::now();
        let entity = match existing {
            Some(existing) => {
                entity::prelude::MouApproval::delete_many()
                    .filter(entity::mou_approval::Column::MouId.eq(existing.id))
                    .exec(self.db)
                    .await?;

                let mut active = existing.into_active_model();
                active.title = ActiveValue::Set(title);
                active.document_url = ActiveValue::Set(document_url);
                active.status = ActiveValue::Set(MouStatus::Pending.as_str().to_string());
                active.updated_at = ActiveValue::Set(now);
                active.update(self.db).await?
            }
            None => {
                entity::mou::ActiveModel {
                    campaign_id: ActiveValue::Set(campaign_id),
                    title: ActiveValue::Set(title),
                    document_url: ActiveValue::Set(document_url),
                    status: ActiveValue::Set(MouStatus::Pending.as_str().to_string()),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Mou::from_entity(entity, Vec::new())
    }

    /// Records one user's decision on the current document.
    pub async fn add_approval(
        &self,
        mou_id: i32,
        user_id: i32,
        party: MouParty,
        decision: MouDecision,
        comment: Option<String>,
    ) -> Result<MouApproval, DbErr> {
        let entity = entity::mou_approval::ActiveModel {
            mou_id: ActiveValue::Set(mou_id),
            user_id: ActiveValue::Set(user_id),
            party: ActiveValue::Set(party.as_str().to_string()),
            decision: ActiveValue::Set(decision.as_str().to_string()),
            comment: ActiveValue::Set(comment),
            decided_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        MouApproval::from_entity(entity)
    }

    pub async fn set_status(&self, mou_id: i32, status: MouStatus) -> Result<(), DbErr> {
        let Some(entity) = entity::prelude::Mou::find_by_id(mou_id).one(self.db).await? else {
            return Ok(());
        };

        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        Ok(())
    }

    async fn approvals(&self, mou_id: i32) -> Result<Vec<MouApproval>, DbErr> {
        entity::prelude::MouApproval::find()
            .filter(entity::mou_approval::Column::MouId.eq(mou_id))
            .order_by_asc(entity::mou_approval::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(MouApproval::from_entity)
            .collect()
    }
}
