use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::health::health_check;

pub fn build_health_check_routers() -> Router<AppRegistry> {
    let routers = Router::new().route("/", get(health_check));
    Router::new().nest("/health", routers)
}
