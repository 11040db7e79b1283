use chrono::{DateTime, Utc};

use crate::model::notification::NotificationDto;

/// What a notification is about. Stored as its snake_case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    CampaignCreated,
    CampaignApproved,
    CampaignRejected,
    CampaignCancelled,
    CampaignCompleted,
    InvitationReceived,
    InvitationResponded,
    DeliverableSubmitted,
    ProfileSubmitted,
    ProfileReviewed,
    MouRequested,
    MouSettled,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CampaignCreated => "campaign_created",
            Self::CampaignApproved => "campaign_approved",
            Self::CampaignRejected => "campaign_rejected",
            Self::CampaignCancelled => "campaign_cancelled",
            Self::CampaignCompleted => "campaign_completed",
            Self::InvitationReceived => "invitation_received",
            Self::InvitationResponded => "invitation_responded",
            Self::DeliverableSubmitted => "deliverable_submitted",
            Self::ProfileSubmitted => "profile_submitted",
            Self::ProfileReviewed => "profile_reviewed",
            Self::MouRequested => "mou_requested",
            Self::MouSettled => "mou_settled",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub link: Option<String>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            kind: self.kind,
            title: self.title,
            message: self.message,
            link: self.link,
            read: self.read,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            kind: entity.kind,
            title: entity.title,
            message: entity.message,
            link: entity.link,
            read: entity.read,
            created_at: entity.created_at,
        }
    }
}

/// Content of a notification, sent to one or more recipients.
#[derive(Debug, Clone)]
pub struct NotificationContent {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Application-relative path; stored prefixed with the application URL.
    pub link: Option<String>,
}

impl NotificationContent {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            link: None,
        }
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}
