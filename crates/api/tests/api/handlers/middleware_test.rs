use axum::{body::to_bytes, http::StatusCode};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use staysync_api::middleware::error_handling::map_error;
use staysync_core::errors::StayError;
use uuid::Uuid;

async fn body_of(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_error_handling_not_found() {
    let response = map_error(StayError::NotFound("Hotel with ID 1 not found".to_string()));

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_of(response).await, json!({ "error": "Hotel with ID 1 not found" }));
}

#[tokio::test]
async fn test_error_handling_no_availability() {
    let start = NaiveDate::from_ymd_opt(2018, 3, 26).unwrap().and_hms_opt(11, 0, 0).unwrap();
    let end = NaiveDate::from_ymd_opt(2018, 3, 27).unwrap().and_hms_opt(10, 0, 0).unwrap();
    let response = map_error(StayError::NoAvailability { start, end });

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_of(response).await,
        json!({
            "non_field_errors": [
                "Sorry, no reservations available between 2018-03-26 11:00:00 and 2018-03-27 10:00:00"
            ]
        })
    );
}

#[tokio::test]
async fn test_error_handling_date_kinds() {
    let response = map_error(StayError::InvalidDateOrder);
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_of(response).await["non_field_errors"].is_array());

    let response = map_error(StayError::InvalidDateFormat { field: "departure_date" });
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_of(response).await["departure_date"].is_array());
}

#[tokio::test]
async fn test_error_handling_hotel_not_found_is_a_field_error() {
    let response = map_error(StayError::HotelNotFound(Uuid::nil()));

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_of(response).await["hotel"].is_array());
}

#[tokio::test]
async fn test_error_handling_database_hides_details() {
    let response = map_error(StayError::Database(eyre::eyre!("password authentication failed")));

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_of(response).await, json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn test_error_handling_internal() {
    let error = StayError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));
    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
