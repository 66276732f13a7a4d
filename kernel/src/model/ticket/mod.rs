use chrono::{DateTime, NaiveDate, Utc};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::model::{id::TicketId, role::Role};

pub mod event;

/// Ticket status. No transition graph is enforced: any status may follow any other.
#[derive(
    Debug, EnumString, AsRefStr, Display, EnumIter, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum TicketStatus {
    #[strum(serialize = "Erstellt")]
    Created,
    #[strum(serialize = "Offen")]
    Open,
    #[strum(serialize = "In Bearbeitung")]
    InProgress,
    #[strum(serialize = "Wartend")]
    Waiting,
    #[strum(serialize = "Zur Erledigung")]
    ToDo,
    #[strum(serialize = "Erledigt")]
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub ticket_id: TicketId,
    pub subject: String,
    pub requester: String,
    pub created_at: DateTime<Utc>,
    pub status: TicketStatus,
    pub reminder_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub message: Option<String>,
    pub contact: TicketContact,
    pub attachments: Vec<Attachment>,
    pub notes: Option<String>,
    pub origin: Option<TicketOrigin>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketContact {
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Metadata only; file contents are not kept by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub size_bytes: u64,
    pub content_type: Option<String>,
}

/// Who filed the ticket, and for whom when staff files on behalf of a resident.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketOrigin {
    pub submitted_as: Role,
    pub address: Option<String>,
    pub owner_name: Option<String>,
}

impl TicketOrigin {
    pub fn is_on_behalf(&self) -> bool {
        self.address.is_some() || self.owner_name.is_some()
    }
}
