//! Memorandum of understanding and its multi-party sign-off.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::{
    mou::{MouApprovalDto, MouDto, PendingPartyDto},
    status::{MouDecision, MouParty, MouStatus},
};

#[derive(Debug, Clone, PartialEq)]
pub struct MouApproval {
    pub user_id: i32,
    pub party: MouParty,
    pub decision: MouDecision,
    pub comment: Option<String>,
    pub decided_at: DateTime<Utc>,
}

impl MouApproval {
    pub fn into_dto(self) -> MouApprovalDto {
        MouApprovalDto {
            user_id: self.user_id,
            party: self.party,
            decision: self.decision,
            comment: self.comment,
            decided_at: self.decided_at,
        }
    }

    pub fn from_entity(entity: entity::mou_approval::Model) -> Result<Self, DbErr> {
        Ok(Self {
            user_id: entity.user_id,
            party: entity.party.parse()?,
            decision: entity.decision.parse()?,
            comment: entity.comment,
            decided_at: entity.decided_at,
        })
    }
}

/// A sign-off that hasn't been given yet.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingParty {
    pub party: MouParty,
    /// `None` for the admin party, which any admin can fulfil.
    pub user_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mou {
    pub id: i32,
    pub campaign_id: i32,
    pub title: String,
    pub document_url: String,
    pub status: MouStatus,
    pub approvals: Vec<MouApproval>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Mou {
    pub fn from_entity(
        entity: entity::mou::Model,
        approvals: Vec<MouApproval>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            campaign_id: entity.campaign_id,
            title: entity.title,
            document_url: entity.document_url,
            status: entity.status.parse()?,
            approvals,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self, pending: Vec<PendingParty>) -> MouDto {
        MouDto {
            id: self.id,
            campaign_id: self.campaign_id,
            title: self.title,
            document_url: self.document_url,
            status: self.status,
            approvals: self.approvals.into_iter().map(|a| a.into_dto()).collect(),
            pending_parties: pending
                .into_iter()
                .map(|p| PendingPartyDto {
                    party: p.party,
                    user_id: p.user_id,
                })
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Who has to sign off on a campaign's MOU.
#[derive(Debug, Clone, PartialEq)]
pub struct RequiredParties {
    /// User owning the campaign's brand.
    pub brand_user_id: i32,
    /// Users of every influencer with an accepted or completed invitation.
    pub influencer_user_ids: Vec<i32>,
}

impl RequiredParties {
    /// Parties that haven't approved yet: one admin, the brand owner, then each influencer.
    pub fn pending(&self, approvals: &[MouApproval]) -> Vec<PendingParty> {
        let approved = |party: MouParty, user_id: Option<i32>| {
            approvals.iter().any(|a| {
                a.party == party
                    && a.decision == MouDecision::Approved
                    && user_id.map_or(true, |id| a.user_id == id)
            })
        };

        let mut pending = Vec::new();

        if !approved(MouParty::Admin, None) {
            pending.push(PendingParty {
                party: MouParty::Admin,
                user_id: None,
            });
        }
        if !approved(MouParty::Brand, Some(self.brand_user_id)) {
            pending.push(PendingParty {
                party: MouParty::Brand,
                user_id: Some(self.brand_user_id),
            });
        }
        for &user_id in &self.influencer_user_ids {
            if !approved(MouParty::Influencer, Some(user_id)) {
                pending.push(PendingParty {
                    party: MouParty::Influencer,
                    user_id: Some(user_id),
                });
            }
        }

        pending
    }

    /// Status implied by the decisions so far.
    ///
    /// Any rejection rejects the document; it's approved once nothing is pending.
    pub fn settle(&self, approvals: &[MouApproval]) -> MouStatus {
        if approvals
            .iter()
            .any(|a| a.decision == MouDecision::Rejected)
        {
            return MouStatus::Rejected;
        }

        if self.pending(approvals).is_empty() {
            MouStatus::Approved
        } else {
            MouStatus::Pending
        }
    }

    /// The party `user_id` decides as, or `None` if they have no say.
    pub fn party_of(&self, user_id: i32, is_admin: bool) -> Option<MouParty> {
        if is_admin {
            Some(MouParty::Admin)
        } else if user_id == self.brand_user_id {
            Some(MouParty::Brand)
        } else if self.influencer_user_ids.contains(&user_id) {
            Some(MouParty::Influencer)
        } else {
            None
        }
    }
}
