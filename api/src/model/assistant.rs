use garde::Validate;
use kernel::model::agenda::{AgendaItem, ImprovedAgendaItem};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EchoRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EchoResponse {
    pub echoed: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ImproveAgendaRequest {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(skip)]
    pub description: String,
}

impl From<ImproveAgendaRequest> for AgendaItem {
    fn from(value: ImproveAgendaRequest) -> Self {
        let ImproveAgendaRequest { title, description } = value;
        AgendaItem { title, description }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveAgendaResponse {
    pub improved_title: String,
    pub improved_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_notes: Option<Vec<String>>,
    pub vote_required: bool,
}

impl From<ImprovedAgendaItem> for ImproveAgendaResponse {
    fn from(value: ImprovedAgendaItem) -> Self {
        let ImprovedAgendaItem {
            improved_title,
            improved_description,
            legal_notes,
            vote_required,
        } = value;
        Self {
            improved_title,
            improved_description,
            legal_notes,
            vote_required,
        }
    }
}
