use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::test_utils::{get_request, offline_router, send};

#[tokio::test]
async fn test_health_check() {
    let (status, body) = send(offline_router(), get_request("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_version_reports_package() {
    let (status, body) = send(offline_router(), get_request("/version")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], json!("staysync-api"));
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_api_root_links_collections() {
    let (status, body) = send(offline_router(), get_request("/api")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "hotels": "/api/hotels", "reservations": "/api/reservations" })
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, _) = send(offline_router(), get_request("/api/rooms")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
