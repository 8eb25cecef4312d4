use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: Uuid,
    pub name: String,
    pub room_capacity: i32,
    /// Percentage of `room_capacity` that may be booked beyond the physical rooms.
    pub over_booking_capacity: i32,
}

impl Hotel {
    /// Number of extra reservations the overbooking percentage allows, floored.
    pub fn over_booking_allowance(&self) -> i64 {
        i64::from(self.room_capacity) * i64::from(self.over_booking_capacity) / 100
    }

    /// Physical rooms plus the overbooking allowance.
    pub fn effective_capacity(&self) -> i64 {
        i64::from(self.room_capacity) + self.over_booking_allowance()
    }

    pub fn url(&self) -> String {
        hotel_url(self.id)
    }
}

pub fn hotel_url(id: Uuid) -> String {
    format!("/api/hotels/{}", id)
}

/// Body of `POST /api/hotels` and `PUT /api/hotels/:id`.
///
/// Required fields are optional at the serde level so a missing one is a
/// field error rather than a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateHotelRequest {
    #[validate(
        required(message = "This field is required."),
        length(min = 1, max = 255)
    )]
    pub name: Option<String>,
    #[validate(required(message = "This field is required."))]
    pub room_capacity: Option<i32>,
    #[serde(default)]
    #[validate(range(min = 0, message = "Ensure this value is greater than or equal to 0."))]
    pub over_booking_capacity: i32,
}

/// Body of `PATCH /api/hotels/:id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateHotelRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub room_capacity: Option<i32>,
    #[validate(range(min = 0, message = "Ensure this value is greater than or equal to 0."))]
    pub over_booking_capacity: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelResponse {
    pub url: String,
    pub id: Uuid,
    pub name: String,
    pub room_capacity: i32,
    pub over_booking_capacity: i32,
}

impl From<Hotel> for HotelResponse {
    fn from(hotel: Hotel) -> Self {
        Self {
            url: hotel.url(),
            id: hotel.id,
            name: hotel.name,
            room_capacity: hotel.room_capacity,
            over_booking_capacity: hotel.over_booking_capacity,
        }
    }
}
