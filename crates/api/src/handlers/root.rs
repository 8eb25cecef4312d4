use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiRootResponse {
    pub hotels: String,
    pub reservations: String,
}

/// Links to the browsable collections.
pub async fn api_root() -> Json<ApiRootResponse> {
    Json(ApiRootResponse {
        hotels: "/api/hotels".to_string(),
        reservations: "/api/reservations".to_string(),
    })
}
