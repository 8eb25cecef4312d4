use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use staysync_core::models::{hotel::Hotel, reservation::Reservation};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbHotel {
    pub id: Uuid,
    pub name: String,
    pub room_capacity: i32,
    pub over_booking_capacity: i32,
}

impl From<DbHotel> for Hotel {
    fn from(row: DbHotel) -> Self {
        Self {
            id: row.id,
            name: row.name,
            room_capacity: row.room_capacity,
            over_booking_capacity: row.over_booking_capacity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbReservation {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub guest_name: String,
    pub guest_email: String,
    pub arrival_date: NaiveDateTime,
    pub departure_date: NaiveDateTime,
    pub created_time: DateTime<Utc>,
    pub last_modified_time: DateTime<Utc>,
}

impl From<DbReservation> for Reservation {
    fn from(row: DbReservation) -> Self {
        Self {
            id: row.id,
            hotel_id: row.hotel_id,
            guest_name: row.guest_name,
            guest_email: row.guest_email,
            arrival_date: row.arrival_date,
            departure_date: row.departure_date,
            created_time: row.created_time,
            last_modified_time: row.last_modified_time,
        }
    }
}

/// Reservation row joined with the columns of its hotel.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbReservationDetail {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub guest_name: String,
    pub guest_email: String,
    pub arrival_date: NaiveDateTime,
    pub departure_date: NaiveDateTime,
    pub created_time: DateTime<Utc>,
    pub last_modified_time: DateTime<Utc>,
    pub hotel_name: String,
    pub hotel_room_capacity: i32,
    pub hotel_over_booking_capacity: i32,
}

impl DbReservationDetail {
    pub fn into_parts(self) -> (Reservation, Hotel) {
        let hotel = Hotel {
            id: self.hotel_id,
            name: self.hotel_name,
            room_capacity: self.hotel_room_capacity,
            over_booking_capacity: self.hotel_over_booking_capacity,
        };
        let reservation = Reservation {
            id: self.id,
            hotel_id: self.hotel_id,
            guest_name: self.guest_name,
            guest_email: self.guest_email,
            arrival_date: self.arrival_date,
            departure_date: self.departure_date,
            created_time: self.created_time,
            last_modified_time: self.last_modified_time,
        };
        (reservation, hotel)
    }
}
