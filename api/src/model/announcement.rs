use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::announcement::{event::CreateAnnouncement, Announcement, Audience};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AudienceName {
    #[default]
    All,
    Owners,
}

impl From<Audience> for AudienceName {
    fn from(value: Audience) -> Self {
        match value {
            Audience::All => Self::All,
            Audience::Owners => Self::Owners,
        }
    }
}

impl From<AudienceName> for Audience {
    fn from(value: AudienceName) -> Self {
        match value {
            AudienceName::All => Self::All,
            AudienceName::Owners => Self::Owners,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateAnnouncementRequest {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(length(min = 1))]
    pub body: String,
    #[serde(default)]
    #[garde(skip)]
    pub audience: AudienceName,
}

#[derive(new)]
pub struct CreateAnnouncementRequestWithAuthor(String, CreateAnnouncementRequest);

impl From<CreateAnnouncementRequestWithAuthor> for CreateAnnouncement {
    fn from(value: CreateAnnouncementRequestWithAuthor) -> Self {
        let CreateAnnouncementRequestWithAuthor(
            author,
            CreateAnnouncementRequest {
                title,
                body,
                audience,
            },
        ) = value;
        CreateAnnouncement::new(title, body, author, audience.into())
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncementResponse {
    pub announcement_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementResponse {
    pub announcement_id: String,
    pub title: String,
    pub body: String,
    pub author: String,
    pub audience: AudienceName,
    pub created_at: DateTime<Utc>,
}

impl From<Announcement> for AnnouncementResponse {
    fn from(value: Announcement) -> Self {
        let Announcement {
            announcement_id,
            title,
            body,
            author,
            audience,
            created_at,
        } = value;
        Self {
            announcement_id: announcement_id.to_string(),
            title,
            body,
            author,
            audience: audience.into(),
            created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementsResponse {
    pub items: Vec<AnnouncementResponse>,
}

impl From<Vec<Announcement>> for AnnouncementsResponse {
    fn from(value: Vec<Announcement>) -> Self {
        Self {
            items: value.into_iter().map(AnnouncementResponse::from).collect(),
        }
    }
}
