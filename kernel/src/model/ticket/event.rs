use chrono::NaiveDate;

use super::{Attachment, TicketContact, TicketOrigin, TicketStatus};
use crate::model::id::TicketId;

#[derive(Debug, Clone)]
pub struct CreateTicket {
    pub subject: String,
    pub requester: String,
    pub category: Option<String>,
    pub message: Option<String>,
    pub contact: TicketContact,
    pub attachments: Vec<Attachment>,
    pub reminder_date: Option<NaiveDate>,
    pub origin: Option<TicketOrigin>,
}

impl CreateTicket {
    pub fn new(subject: impl Into<String>, requester: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            requester: requester.into(),
            category: None,
            message: None,
            contact: TicketContact::default(),
            attachments: Vec::new(),
            reminder_date: None,
            origin: None,
        }
    }
}

/// Fields left as `None` keep their current value.
/// `reminder_date: Some(None)` clears the reminder.
#[derive(Debug, Clone)]
pub struct UpdateTicket {
    pub ticket_id: TicketId,
    pub status: Option<TicketStatus>,
    pub notes: Option<String>,
    pub reminder_date: Option<Option<NaiveDate>>,
}

impl UpdateTicket {
    pub fn status(ticket_id: TicketId, status: TicketStatus) -> Self {
        Self {
            ticket_id,
            status: Some(status),
            notes: None,
            reminder_date: None,
        }
    }
}
