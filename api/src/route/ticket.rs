use axum::{
    routing::{get, patch, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::ticket::{
    register_ticket, show_my_tickets, show_ticket, show_ticket_list, stream_ticket_events,
    update_ticket,
};

pub fn build_ticket_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", post(register_ticket))
        .route("/", get(show_ticket_list))
        .route("/mine", get(show_my_tickets))
        .route("/events", get(stream_ticket_events))
        .route("/:ticket_id", get(show_ticket))
        .route("/:ticket_id", patch(update_ticket));

    Router::new().nest("/tickets", routers)
}
