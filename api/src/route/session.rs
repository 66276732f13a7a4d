use axum::{
    routing::{get, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::session::{show_session, switch_role};

pub fn build_session_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_session))
        .route("/role", put(switch_role));
    Router::new().nest("/session", routers)
}
