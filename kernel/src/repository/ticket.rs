use async_trait::async_trait;
use shared::error::AppResult;
use tokio::sync::watch;

use crate::model::{
    id::TicketId,
    ticket::{
        event::{CreateTicket, UpdateTicket},
        Ticket,
    },
};

/// Registry contents after a change, newest ticket first.
#[derive(Debug, Clone, Default)]
pub struct TicketSnapshot {
    pub revision: u64,
    pub tickets: Vec<Ticket>,
}

#[async_trait]
pub trait TicketRepository: Send + Sync {
    // チケットを登録し、採番した ID を返す
    async fn add(&self, event: CreateTicket) -> AppResult<TicketId>;
    // 指定されたフィールドだけを上書きする
    async fn update(&self, event: UpdateTicket) -> AppResult<()>;
    async fn find_by_id(&self, ticket_id: &TicketId) -> AppResult<Option<Ticket>>;
    // requester が完全一致するチケットを登録順のまま返す
    async fn find_by_requester(&self, requester: &str) -> AppResult<Vec<Ticket>>;
    async fn find_all(&self) -> AppResult<Vec<Ticket>>;
    fn subscribe(&self) -> watch::Receiver<TicketSnapshot>;
}
