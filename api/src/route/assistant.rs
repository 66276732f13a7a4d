use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::assistant::{echo, improve_agenda_item};

pub fn build_assistant_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/echo", post(echo))
        .route("/agenda/improve", post(improve_agenda_item))
}
