use std::error::Error;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use staysync_core::errors::{StayError, StayResult, NON_FIELD_ERRORS};
use uuid::Uuid;
use validator::Validate;

#[test]
fn test_stay_error_display() {
    let start = NaiveDate::from_ymd_opt(2018, 3, 26)
        .unwrap()
        .and_hms_opt(11, 0, 0)
        .unwrap();
    let end = NaiveDate::from_ymd_opt(2018, 3, 27)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();

    assert_eq!(
        StayError::NotFound("Hotel missing".to_string()).to_string(),
        "Resource not found: Hotel missing"
    );
    assert_eq!(
        StayError::InvalidDateOrder.to_string(),
        "Departure date cannot be prior to or the same as the arrival date"
    );
    assert_eq!(
        StayError::NoAvailability { start, end }.to_string(),
        "Sorry, no reservations available between 2018-03-26 11:00:00 and 2018-03-27 10:00:00"
    );
    assert_eq!(
        StayError::field("name", "This field is required.").to_string(),
        "Validation error: name: This field is required."
    );
    assert!(StayError::Database(eyre::eyre!("connection refused"))
        .to_string()
        .contains("Database error:"));
}

#[test]
fn test_validation_kinds() {
    assert!(StayError::InvalidDateOrder.is_validation());
    assert!(StayError::InvalidCapacity(0).is_validation());
    assert!(StayError::HotelNotFound(Uuid::new_v4()).is_validation());
    assert!(!StayError::NotFound("x".to_string()).is_validation());
    assert!(!StayError::Database(eyre::eyre!("down")).is_validation());
}

#[test]
fn test_field_errors_mapping() {
    let order = StayError::InvalidDateOrder.field_errors().unwrap();
    assert_eq!(
        order[NON_FIELD_ERRORS],
        vec!["Departure date cannot be prior to or the same as the arrival date".to_string()]
    );

    let format = StayError::InvalidDateFormat { field: "arrival_date" }
        .field_errors()
        .unwrap();
    assert!(format.contains_key("arrival_date"));

    let capacity = StayError::InvalidCapacity(0).field_errors().unwrap();
    assert_eq!(
        capacity["room_capacity"],
        vec!["Ensure this value is greater than or equal to 1.".to_string()]
    );

    let id = Uuid::new_v4();
    let hotel = StayError::HotelNotFound(id).field_errors().unwrap();
    assert_eq!(hotel["hotel"], vec![format!("Hotel with ID {} does not exist", id)]);

    assert!(StayError::NotFound("x".to_string()).field_errors().is_none());
}

#[derive(Validate)]
struct ContactForm {
    #[validate(required)]
    name: Option<String>,
    #[validate(email(message = "Enter a valid email address."))]
    email: String,
}

#[test]
fn test_from_validation_errors() {
    let form = ContactForm {
        name: None,
        email: "nope".to_string(),
    };
    let err = StayError::from(form.validate().unwrap_err());
    let fields = err.field_errors().unwrap();

    assert_eq!(fields["name"], vec!["This field is required.".to_string()]);
    assert_eq!(fields["email"], vec!["Enter a valid email address.".to_string()]);
}

#[test]
fn test_internal_error_has_source() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    let err = StayError::Internal(Box::new(io_error));
    assert!(err.source().is_some());

    let result: StayResult<i32> = Err(StayError::InvalidDateOrder);
    assert!(result.is_err());
}
