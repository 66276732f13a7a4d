use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use kernel::{
    clock::Clock,
    model::{
        id::TicketId,
        ticket::{
            event::{CreateTicket, UpdateTicket},
            Ticket, TicketStatus,
        },
    },
    repository::ticket::{TicketRepository, TicketSnapshot},
};
use shared::error::{AppError, AppResult};
use tokio::sync::{watch, RwLock};

use super::seed::seed_tickets;

/// Process-wide ticket registry held in memory. A restart drops every ticket
/// except the seeds.
pub struct InMemoryTicketRepository {
    tickets: RwLock<Vec<Ticket>>,
    clock: Arc<dyn Clock>,
    changes: watch::Sender<TicketSnapshot>,
}

impl InMemoryTicketRepository {
    pub fn new(clock: Arc<dyn Clock>, initial: Vec<Ticket>) -> Self {
        let (changes, _) = watch::channel(TicketSnapshot {
            revision: 0,
            tickets: initial.clone(),
        });
        Self {
            tickets: RwLock::new(initial),
            clock,
            changes,
        }
    }

    pub fn seeded(clock: Arc<dyn Clock>) -> AppResult<Self> {
        Ok(Self::new(clock, seed_tickets()?))
    }

    // 受信者がいなくてもスナップショットは更新する
    fn publish(&self, tickets: &[Ticket]) {
        self.changes.send_modify(|snapshot| {
            snapshot.revision += 1;
            snapshot.tickets = tickets.to_vec();
        });
    }
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn add(&self, event: CreateTicket) -> AppResult<TicketId> {
        let now = self.clock.now();
        let mut tickets = self.tickets.write().await;

        // 削除がないので件数 + 1 は単調増加する
        let ticket_id = TicketId::compose(now.year(), now.month(), tickets.len() + 1);
        let CreateTicket {
            subject,
            requester,
            category,
            message,
            contact,
            attachments,
            reminder_date,
            origin,
        } = event;
        let ticket = Ticket {
            ticket_id: ticket_id.clone(),
            subject,
            requester,
            created_at: now.with_timezone(&Utc),
            status: TicketStatus::Created,
            reminder_date,
            category,
            message,
            contact,
            attachments,
            notes: None,
            origin,
        };
        tickets.insert(0, ticket);
        self.publish(&tickets);

        tracing::info!(ticket_id = %ticket_id, total = tickets.len(), "ticket created");
        Ok(ticket_id)
    }

    async fn update(&self, event: UpdateTicket) -> AppResult<()> {
        let mut tickets = self.tickets.write().await;
        let ticket = tickets
            .iter_mut()
            .find(|t| t.ticket_id == event.ticket_id)
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("ticket ({}) was not found", event.ticket_id))
            })?;

        if let Some(status) = event.status {
            tracing::debug!(
                ticket_id = %ticket.ticket_id,
                from = %ticket.status,
                to = %status,
                "ticket status changed"
            );
            ticket.status = status;
        }
        if let Some(notes) = event.notes {
            ticket.notes = Some(notes);
        }
        if let Some(reminder_date) = event.reminder_date {
            ticket.reminder_date = reminder_date;
        }
        self.publish(&tickets);
        Ok(())
    }

    async fn find_by_id(&self, ticket_id: &TicketId) -> AppResult<Option<Ticket>> {
        let tickets = self.tickets.read().await;
        Ok(tickets.iter().find(|t| &t.ticket_id == ticket_id).cloned())
    }

    async fn find_by_requester(&self, requester: &str) -> AppResult<Vec<Ticket>> {
        let tickets = self.tickets.read().await;
        Ok(tickets
            .iter()
            .filter(|t| t.requester == requester)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> AppResult<Vec<Ticket>> {
        Ok(self.tickets.read().await.clone())
    }

    fn subscribe(&self) -> watch::Receiver<TicketSnapshot> {
        self.changes.subscribe()
    }
}
