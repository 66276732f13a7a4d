use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::announcement::{register_announcement, show_announcements};

pub fn build_announcement_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", post(register_announcement))
        .route("/", get(show_announcements));

    Router::new().nest("/announcements", routers)
}
