use chrono::{DateTime, Utc};
use strum::{AsRefStr, Display, EnumString};

use crate::model::id::AnnouncementId;

pub mod event;

#[derive(Debug, EnumString, AsRefStr, Display, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum Audience {
    All,
    Owners,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub announcement_id: AnnouncementId,
    pub title: String,
    pub body: String,
    pub author: String,
    pub audience: Audience,
    pub created_at: DateTime<Utc>,
}
