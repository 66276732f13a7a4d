use chrono::{DateTime, Utc};
use kernel::model::{
    id::TicketId,
    ticket::{Ticket, TicketContact, TicketStatus},
};
use shared::error::{AppError, AppResult};

struct SeedTicket {
    sequence: usize,
    subject: &'static str,
    requester: &'static str,
    created_at: &'static str,
    status: TicketStatus,
    category: &'static str,
    message: &'static str,
}

// 新しい順に並べる
const SEED_TICKETS: [SeedTicket; 4] = [
    SeedTicket {
        sequence: 4,
        subject: "Treppenhausbeleuchtung 3. OG defekt",
        requester: "Frau Becker",
        created_at: "2024-07-18T17:40:00Z",
        status: TicketStatus::Created,
        category: "Elektrik",
        message: "Im dritten Obergeschoss bleibt das Licht im Treppenhaus dunkel.",
    },
    SeedTicket {
        sequence: 3,
        subject: "Fahrradkeller Schloss klemmt",
        requester: "Familie Weber",
        created_at: "2024-07-12T07:05:00Z",
        status: TicketStatus::Waiting,
        category: "Gemeinschaftseigentum",
        message: "Der Schlüssel lässt sich nur mit Mühe drehen.",
    },
    SeedTicket {
        sequence: 2,
        subject: "Wasserfleck an der Decke im Bad",
        requester: "Herr Schmidt",
        created_at: "2024-07-08T14:30:00Z",
        status: TicketStatus::Open,
        category: "Wasserschaden",
        message: "Seit dem Wochenende breitet sich ein Fleck an der Badezimmerdecke aus.",
    },
    SeedTicket {
        sequence: 1,
        subject: "Heizung im Wohnzimmer bleibt kalt",
        requester: "Frau Müller",
        created_at: "2024-07-02T08:15:00Z",
        status: TicketStatus::InProgress,
        category: "Heizung",
        message: "Der Heizkörper wird trotz voll aufgedrehtem Thermostat nicht warm.",
    },
];

/// The four example tickets every fresh registry starts with.
pub fn seed_tickets() -> AppResult<Vec<Ticket>> {
    SEED_TICKETS
        .iter()
        .map(|seed| {
            let created_at = seed
                .created_at
                .parse::<DateTime<Utc>>()
                .map_err(|e| AppError::ConversionEntityError(e.to_string()))?;
            Ok(Ticket {
                ticket_id: TicketId::compose(2024, 7, seed.sequence),
                subject: seed.subject.into(),
                requester: seed.requester.into(),
                created_at,
                status: seed.status,
                reminder_date: None,
                category: Some(seed.category.into()),
                message: Some(seed.message.into()),
                contact: TicketContact::default(),
                attachments: Vec::new(),
                notes: None,
                origin: None,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_are_newest_first_with_unique_ids() {
        let tickets = seed_tickets().unwrap();
        assert_eq!(tickets.len(), 4);
        assert_eq!(tickets[0].ticket_id.as_str(), "T2024-07-004");
        assert_eq!(tickets[3].ticket_id.as_str(), "T2024-07-001");
        assert!(tickets
            .windows(2)
            .all(|w| w[0].created_at > w[1].created_at));
    }
}
