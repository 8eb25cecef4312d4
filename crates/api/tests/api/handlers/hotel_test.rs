use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

use crate::test_utils::{json_request, offline_router, send};

#[tokio::test]
async fn test_create_hotel_rejects_zero_capacity() {
    let request = json_request(
        "POST",
        "/api/hotels",
        r#"{"name": "Tiny Inn", "room_capacity": 0, "over_booking_capacity": 10}"#,
    );
    let (status, body) = send(offline_router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "room_capacity": ["Ensure this value is greater than or equal to 1."] })
    );
}

#[rstest]
#[case::empty_name(r#"{"name": "", "room_capacity": 3}"#, "name")]
#[case::negative_over_booking(
    r#"{"name": "Inn", "room_capacity": 3, "over_booking_capacity": -1}"#,
    "over_booking_capacity"
)]
#[tokio::test]
async fn test_create_hotel_schema_errors(#[case] body: &str, #[case] field: &str) {
    let (status, payload) = send(offline_router(), json_request("POST", "/api/hotels", body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(payload.get(field).is_some(), "missing {field} in {payload}");
}

#[tokio::test]
async fn test_patch_hotel_validates_before_lookup() {
    let request = json_request(
        "PATCH",
        "/api/hotels/6b1f1c56-7c57-4f57-9a1c-2f5d3f9b8e11",
        r#"{"over_booking_capacity": -5}"#,
    );
    let (status, body) = send(offline_router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["over_booking_capacity"],
        json!(["Ensure this value is greater than or equal to 0."])
    );
}

#[tokio::test]
async fn test_malformed_hotel_body() {
    let request = json_request("POST", "/api/hotels", "{ not json");
    let (status, body) = send(offline_router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["non_field_errors"].is_array());
}

#[tokio::test]
async fn test_create_hotel_missing_capacity_is_field_error() {
    let request = json_request("POST", "/api/hotels", r#"{"name": "x"}"#);
    let (status, body) = send(offline_router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "room_capacity": ["This field is required."] }));
}

#[tokio::test]
async fn test_put_hotel_missing_name_is_field_error() {
    let request = json_request(
        "PUT",
        "/api/hotels/6b1f1c56-7c57-4f57-9a1c-2f5d3f9b8e11",
        r#"{"room_capacity": 4}"#,
    );
    let (status, body) = send(offline_router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "name": ["This field is required."] }));
}
