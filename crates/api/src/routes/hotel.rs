use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/hotels",
            get(handlers::hotel::list_hotels).post(handlers::hotel::create_hotel),
        )
        .route(
            "/api/hotels/:id",
            get(handlers::hotel::get_hotel)
                .put(handlers::hotel::replace_hotel)
                .patch(handlers::hotel::patch_hotel)
                .delete(handlers::hotel::delete_hotel),
        )
}
