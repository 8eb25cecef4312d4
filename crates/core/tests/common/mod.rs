#![allow(dead_code)]

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use fake::{
    faker::{internet::en::SafeEmail, name::en::Name},
    Fake,
};
use staysync_core::{
    errors::StayResult,
    models::{hotel::Hotel, reservation::Reservation},
    normalize::{parse_timestamp, DateNormalizer, StayBoundary},
    store::ReservationStore,
    validation::{ReservationCandidate, ValidatedReservation},
};
use uuid::Uuid;

pub fn dt(raw: &str) -> NaiveDateTime {
    parse_timestamp(raw).expect("test timestamp must parse")
}

pub fn hotel(room_capacity: i32, over_booking_capacity: i32) -> Hotel {
    Hotel {
        id: Uuid::new_v4(),
        name: "Test Hotel".to_string(),
        room_capacity,
        over_booking_capacity,
    }
}

/// Reservation at `hotel_id` with dates normalized the way they are persisted.
pub fn reservation(hotel_id: Uuid, arrival: &str, departure: &str) -> Reservation {
    let normalizer = DateNormalizer::default();
    let now = Utc::now();
    Reservation {
        id: Uuid::new_v4(),
        hotel_id,
        guest_name: Name().fake(),
        guest_email: SafeEmail().fake(),
        arrival_date: normalizer.normalize_datetime(dt(arrival), StayBoundary::Arrival),
        departure_date: normalizer.normalize_datetime(dt(departure), StayBoundary::Departure),
        created_time: now,
        last_modified_time: now,
    }
}

pub fn candidate(hotel_id: Uuid, arrival: &str, departure: &str) -> ReservationCandidate {
    ReservationCandidate {
        guest_name: Some(Name().fake()),
        guest_email: Some(SafeEmail().fake()),
        arrival_date: Some(arrival.to_string()),
        departure_date: Some(departure.to_string()),
        hotel_id: Some(hotel_id),
    }
}

/// Store backed by plain collections, counting the writes it receives.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub hotels: HashMap<Uuid, Hotel>,
    pub reservations: Vec<Reservation>,
    pub writes: usize,
}

impl MemoryStore {
    pub fn add_hotel(&mut self, room_capacity: i32, over_booking_capacity: i32) -> Hotel {
        let hotel = hotel(room_capacity, over_booking_capacity);
        self.hotels.insert(hotel.id, hotel.clone());
        hotel
    }

    pub fn add_reservation(&mut self, hotel_id: Uuid, arrival: &str, departure: &str) -> Reservation {
        let reservation = reservation(hotel_id, arrival, departure);
        self.reservations.push(reservation.clone());
        reservation
    }

    pub fn count_for(&self, hotel_id: Uuid) -> usize {
        self.reservations
            .iter()
            .filter(|r| r.hotel_id == hotel_id)
            .count()
    }
}

#[async_trait]
impl ReservationStore for MemoryStore {
    async fn get_hotel(&mut self, id: Uuid) -> StayResult<Option<Hotel>> {
        Ok(self.hotels.get(&id).cloned())
    }

    async fn get_reservation(&mut self, id: Uuid) -> StayResult<Option<Reservation>> {
        Ok(self.reservations.iter().find(|r| r.id == id).cloned())
    }

    async fn list_reservations_for_hotel(&mut self, hotel_id: Uuid) -> StayResult<Vec<Reservation>> {
        Ok(self
            .reservations
            .iter()
            .filter(|r| r.hotel_id == hotel_id)
            .cloned()
            .collect())
    }

    async fn insert_reservation(&mut self, draft: &ValidatedReservation) -> StayResult<Reservation> {
        let now = Utc::now();
        let reservation = Reservation {
            id: Uuid::new_v4(),
            hotel_id: draft.hotel_id,
            guest_name: draft.guest_name.clone(),
            guest_email: draft.guest_email.clone(),
            arrival_date: draft.arrival_date,
            departure_date: draft.departure_date,
            created_time: now,
            last_modified_time: now,
        };
        self.reservations.push(reservation.clone());
        self.writes += 1;
        Ok(reservation)
    }

    async fn update_reservation(
        &mut self,
        id: Uuid,
        draft: &ValidatedReservation,
    ) -> StayResult<Reservation> {
        let reservation = self
            .reservations
            .iter_mut()
            .find(|r| r.id == id)
            .expect("reservation under update must exist");
        reservation.guest_name = draft.guest_name.clone();
        reservation.guest_email = draft.guest_email.clone();
        reservation.arrival_date = draft.arrival_date;
        reservation.departure_date = draft.departure_date;
        reservation.last_modified_time = Utc::now();
        self.writes += 1;
        Ok(reservation.clone())
    }

    async fn delete_reservation(&mut self, id: Uuid) -> StayResult<bool> {
        let before = self.reservations.len();
        self.reservations.retain(|r| r.id != id);
        let deleted = self.reservations.len() != before;
        if deleted {
            self.writes += 1;
        }
        Ok(deleted)
    }
}
