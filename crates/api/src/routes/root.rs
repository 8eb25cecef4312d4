use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api", get(handlers::root::api_root))
        .route("/api/", get(handlers::root::api_root))
}
