use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    models::hotel::{Hotel, HotelResponse},
    normalize::deserialize_raw_timestamp,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub guest_name: String,
    pub guest_email: String,
    /// Always stored normalized to the check-in time.
    pub arrival_date: NaiveDateTime,
    /// Always stored normalized to the check-out time.
    pub departure_date: NaiveDateTime,
    pub created_time: DateTime<Utc>,
    pub last_modified_time: DateTime<Utc>,
}

impl Reservation {
    pub fn url(&self) -> String {
        reservation_url(self.id)
    }
}

pub fn reservation_url(id: Uuid) -> String {
    format!("/api/reservations/{}", id)
}

/// Body of `POST /api/reservations` and `PUT /api/reservations/:id`.
///
/// Every field is optional at the serde level so that missing fields are
/// reported together as field errors instead of a single parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateReservationRequest {
    #[validate(
        required(message = "This field is required."),
        length(min = 1, max = 255)
    )]
    pub guest_name: Option<String>,

    #[validate(
        required(message = "This field is required."),
        email(message = "Enter a valid email address."),
        length(max = 254, message = "Ensure this field has no more than 254 characters.")
    )]
    pub guest_email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_raw_timestamp")]
    #[validate(required(message = "This field is required."))]
    pub arrival_date: Option<String>,

    #[serde(default, deserialize_with = "deserialize_raw_timestamp")]
    #[validate(required(message = "This field is required."))]
    pub departure_date: Option<String>,

    #[validate(required(message = "This field is required."))]
    pub hotel: Option<Uuid>,
}

/// Body of `PATCH /api/reservations/:id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateReservationRequest {
    #[validate(length(min = 1, max = 255))]
    pub guest_name: Option<String>,

    #[validate(
        email(message = "Enter a valid email address."),
        length(max = 254, message = "Ensure this field has no more than 254 characters.")
    )]
    pub guest_email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_raw_timestamp")]
    pub arrival_date: Option<String>,

    #[serde(default, deserialize_with = "deserialize_raw_timestamp")]
    pub departure_date: Option<String>,

    pub hotel: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationResponse {
    pub url: String,
    pub id: Uuid,
    pub guest_name: String,
    pub guest_email: String,
    pub arrival_date: NaiveDateTime,
    pub departure_date: NaiveDateTime,
    pub hotel: Uuid,
    pub hotel_data: HotelResponse,
    pub created_time: DateTime<Utc>,
    pub last_modified_time: DateTime<Utc>,
}

impl ReservationResponse {
    pub fn new(reservation: Reservation, hotel: Hotel) -> Self {
        Self {
            url: reservation.url(),
            id: reservation.id,
            guest_name: reservation.guest_name,
            guest_email: reservation.guest_email,
            arrival_date: reservation.arrival_date,
            departure_date: reservation.departure_date,
            hotel: reservation.hotel_id,
            hotel_data: hotel.into(),
            created_time: reservation.created_time,
            last_modified_time: reservation.last_modified_time,
        }
    }
}
