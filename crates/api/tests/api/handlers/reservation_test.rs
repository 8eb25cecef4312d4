use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::test_utils::{json_request, offline_router, send};

#[test_log::test(tokio::test)]
async fn test_empty_body_reports_every_required_field() {
    let (status, body) = send(offline_router(), json_request("POST", "/api/reservations", "{}")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let required = json!(["This field is required."]);
    for field in ["guest_name", "guest_email", "arrival_date", "departure_date", "hotel"] {
        assert_eq!(body[field], required, "field {field}");
    }
    assert_eq!(body.as_object().map(|o| o.len()), Some(5));
}

#[tokio::test]
async fn test_invalid_email_is_rejected() {
    let request = json_request(
        "POST",
        "/api/reservations",
        r#"{
            "guest_name": "Ada",
            "guest_email": "ada-at-example",
            "arrival_date": "2018-03-26",
            "departure_date": "2018-03-27",
            "hotel": "6b1f1c56-7c57-4f57-9a1c-2f5d3f9b8e11"
        }"#,
    );
    let (status, body) = send(offline_router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["guest_email"], json!(["Enter a valid email address."]));
}

#[tokio::test]
async fn test_put_requires_full_body() {
    let request = json_request(
        "PUT",
        "/api/reservations/6b1f1c56-7c57-4f57-9a1c-2f5d3f9b8e11",
        r#"{"guest_name": "Ada"}"#,
    );
    let (status, body) = send(offline_router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("guest_name").is_none());
    assert!(body.get("guest_email").is_some());
    assert!(body.get("hotel").is_some());
}

#[tokio::test]
async fn test_malformed_body_is_a_non_field_error() {
    let request = json_request("POST", "/api/reservations", r#"{"guest_name": "Ada""#);
    let (status, body) = send(offline_router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["non_field_errors"][0]
        .as_str()
        .is_some_and(|m| m.starts_with("JSON parse error")));
}

#[tokio::test]
async fn test_overlong_email_is_a_field_error() {
    let domain = vec!["a".repeat(60); 4].join(".");
    let email = format!("{}@{}.com", "b".repeat(64), domain);
    let body = json!({
        "guest_name": "Ada",
        "guest_email": email,
        "arrival_date": "2018-03-26",
        "departure_date": "2018-03-27",
        "hotel": "6b1f1c56-7c57-4f57-9a1c-2f5d3f9b8e11"
    })
    .to_string();
    let (status, payload) = send(offline_router(), json_request("POST", "/api/reservations", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        payload["guest_email"],
        json!(["Ensure this field has no more than 254 characters."])
    );
}
