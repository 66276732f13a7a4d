use chrono::{DateTime, NaiveDate, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::TicketId,
    role::Role,
    ticket::{
        event::{CreateTicket, UpdateTicket},
        Attachment, Ticket, TicketContact, TicketOrigin, TicketStatus,
    },
};
use kernel::repository::ticket::TicketSnapshot;
use serde::{Deserialize, Deserializer, Serialize};

use super::user::RoleName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatusName {
    #[serde(rename = "Erstellt")]
    Created,
    #[serde(rename = "Offen")]
    Open,
    #[serde(rename = "In Bearbeitung")]
    InProgress,
    #[serde(rename = "Wartend")]
    Waiting,
    #[serde(rename = "Zur Erledigung")]
    ToDo,
    #[serde(rename = "Erledigt")]
    Done,
}

impl From<TicketStatus> for TicketStatusName {
    fn from(value: TicketStatus) -> Self {
        match value {
            TicketStatus::Created => Self::Created,
            TicketStatus::Open => Self::Open,
            TicketStatus::InProgress => Self::InProgress,
            TicketStatus::Waiting => Self::Waiting,
            TicketStatus::ToDo => Self::ToDo,
            TicketStatus::Done => Self::Done,
        }
    }
}

impl From<TicketStatusName> for TicketStatus {
    fn from(value: TicketStatusName) -> Self {
        match value {
            TicketStatusName::Created => Self::Created,
            TicketStatusName::Open => Self::Open,
            TicketStatusName::InProgress => Self::InProgress,
            TicketStatusName::Waiting => Self::Waiting,
            TicketStatusName::ToDo => Self::ToDo,
            TicketStatusName::Done => Self::Done,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AttachmentRequest {
    #[garde(length(min = 1))]
    pub file_name: String,
    #[garde(skip)]
    pub size_bytes: u64,
    #[garde(skip)]
    pub content_type: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTicketRequest {
    #[garde(length(min = 1))]
    pub subject: String,
    #[garde(length(min = 1))]
    pub requester: String,
    #[garde(skip)]
    pub category: Option<String>,
    #[garde(skip)]
    pub message: Option<String>,
    #[garde(email)]
    pub email: Option<String>,
    #[garde(skip)]
    pub phone: Option<String>,
    #[serde(default)]
    #[garde(dive)]
    pub attachments: Vec<AttachmentRequest>,
    #[garde(skip)]
    pub reminder_date: Option<NaiveDate>,
    // 現地スタッフが居住者の代わりに登録する場合のみ指定する
    #[garde(length(min = 1))]
    pub address: Option<String>,
    #[garde(length(min = 1))]
    pub owner_name: Option<String>,
}

impl CreateTicketRequest {
    pub fn is_on_behalf(&self) -> bool {
        self.address.is_some() || self.owner_name.is_some()
    }
}

#[derive(new)]
pub struct CreateTicketRequestWithRole(Role, CreateTicketRequest);

impl From<CreateTicketRequestWithRole> for CreateTicket {
    fn from(value: CreateTicketRequestWithRole) -> Self {
        let CreateTicketRequestWithRole(
            submitted_as,
            CreateTicketRequest {
                subject,
                requester,
                category,
                message,
                email,
                phone,
                attachments,
                reminder_date,
                address,
                owner_name,
            },
        ) = value;
        CreateTicket {
            subject,
            requester,
            category,
            message,
            contact: TicketContact { email, phone },
            attachments: attachments
                .into_iter()
                .map(|a| Attachment {
                    file_name: a.file_name,
                    size_bytes: a.size_bytes,
                    content_type: a.content_type,
                })
                .collect(),
            reminder_date,
            origin: Some(TicketOrigin {
                submitted_as,
                address,
                owner_name,
            }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketResponse {
    pub ticket_id: String,
}

// null と未指定を区別する: 未指定は None、null は Some(None)
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateTicketRequest {
    #[garde(skip)]
    pub status: Option<TicketStatusName>,
    #[garde(skip)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[garde(skip)]
    pub reminder_date: Option<Option<NaiveDate>>,
}

#[derive(new)]
pub struct UpdateTicketRequestWithId(TicketId, UpdateTicketRequest);

impl From<UpdateTicketRequestWithId> for UpdateTicket {
    fn from(value: UpdateTicketRequestWithId) -> Self {
        let UpdateTicketRequestWithId(
            ticket_id,
            UpdateTicketRequest {
                status,
                notes,
                reminder_date,
            },
        ) = value;
        UpdateTicket {
            ticket_id,
            status: status.map(TicketStatus::from),
            notes,
            reminder_date,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentResponse {
    pub file_name: String,
    pub size_bytes: u64,
    pub content_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketOriginResponse {
    pub submitted_as: RoleName,
    pub address: Option<String>,
    pub owner_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    pub ticket_id: String,
    pub subject: String,
    pub requester: String,
    pub created_at: DateTime<Utc>,
    pub status: TicketStatusName,
    pub reminder_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub message: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub attachments: Vec<AttachmentResponse>,
    pub notes: Option<String>,
    pub origin: Option<TicketOriginResponse>,
}

impl From<Ticket> for TicketResponse {
    fn from(value: Ticket) -> Self {
        let Ticket {
            ticket_id,
            subject,
            requester,
            created_at,
            status,
            reminder_date,
            category,
            message,
            contact,
            attachments,
            notes,
            origin,
        } = value;
        Self {
            ticket_id: ticket_id.to_string(),
            subject,
            requester,
            created_at,
            status: status.into(),
            reminder_date,
            category,
            message,
            email: contact.email,
            phone: contact.phone,
            attachments: attachments
                .into_iter()
                .map(|a| AttachmentResponse {
                    file_name: a.file_name,
                    size_bytes: a.size_bytes,
                    content_type: a.content_type,
                })
                .collect(),
            notes,
            origin: origin.map(|o| TicketOriginResponse {
                submitted_as: o.submitted_as.into(),
                address: o.address,
                owner_name: o.owner_name,
            }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketsResponse {
    pub items: Vec<TicketResponse>,
}

impl From<Vec<Ticket>> for TicketsResponse {
    fn from(value: Vec<Ticket>) -> Self {
        Self {
            items: value.into_iter().map(TicketResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSnapshotResponse {
    pub revision: u64,
    pub items: Vec<TicketResponse>,
}

impl From<TicketSnapshot> for TicketSnapshotResponse {
    fn from(value: TicketSnapshot) -> Self {
        let TicketSnapshot { revision, tickets } = value;
        Self {
            revision,
            items: tickets.into_iter().map(TicketResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_distinguishes_null_from_absent() {
        let absent: UpdateTicketRequest = serde_json::from_str(r#"{"status":"Erledigt"}"#).unwrap();
        assert_eq!(absent.reminder_date, None);
        assert_eq!(absent.status, Some(TicketStatusName::Done));

        let cleared: UpdateTicketRequest =
            serde_json::from_str(r#"{"reminderDate":null}"#).unwrap();
        assert_eq!(cleared.reminder_date, Some(None));

        let set: UpdateTicketRequest =
            serde_json::from_str(r#"{"reminderDate":"2025-04-01"}"#).unwrap();
        assert_eq!(set.reminder_date, NaiveDate::from_ymd_opt(2025, 4, 1).map(Some));
    }

    #[test]
    fn create_request_rejects_unknown_fields_and_bad_email() {
        assert!(serde_json::from_str::<CreateTicketRequest>(
            r#"{"subject":"a","requester":"b","priority":"high"}"#
        )
        .is_err());

        let req: CreateTicketRequest = serde_json::from_str(
            r#"{"subject":"Heizung","requester":"Frau Müller","email":"kein-mail"}"#,
        )
        .unwrap();
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn create_request_carries_origin_role() {
        let req: CreateTicketRequest = serde_json::from_str(
            r#"{"subject":"Zähler ablesen","requester":"Herr Schmidt","address":"Lindenweg 3","ownerName":"Herr Schmidt"}"#,
        )
        .unwrap();
        assert!(req.validate(&()).is_ok());
        assert!(req.is_on_behalf());

        let event = CreateTicket::from(CreateTicketRequestWithRole::new(Role::FieldAgent, req));
        let origin = event.origin.unwrap();
        assert_eq!(origin.submitted_as, Role::FieldAgent);
        assert!(origin.is_on_behalf());
    }
}
