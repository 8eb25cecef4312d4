//! # Write Validation
//!
//! Domain checks that run before a hotel or reservation is persisted. Schema
//! checks (required fields, email shape, lengths) are done earlier on the
//! request types; this module owns the rules that need dates, capacity and
//! the current reservation set.

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::{
    availability::AvailabilityCalculator,
    errors::{StayError, StayResult},
    models::{
        hotel::{CreateHotelRequest, Hotel, UpdateHotelRequest},
        reservation::{CreateReservationRequest, Reservation, UpdateReservationRequest},
    },
    normalize::{strip_subseconds, DateNormalizer, StayBoundary},
    store::ReservationStore,
};

const REQUIRED: &str = "This field is required.";

/// Reservation fields as supplied by a client, before any domain checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationCandidate {
    pub guest_name: Option<String>,
    pub guest_email: Option<String>,
    pub arrival_date: Option<String>,
    pub departure_date: Option<String>,
    pub hotel_id: Option<Uuid>,
}

impl From<CreateReservationRequest> for ReservationCandidate {
    fn from(req: CreateReservationRequest) -> Self {
        Self {
            guest_name: req.guest_name,
            guest_email: req.guest_email,
            arrival_date: req.arrival_date,
            departure_date: req.departure_date,
            hotel_id: req.hotel,
        }
    }
}

impl From<UpdateReservationRequest> for ReservationCandidate {
    fn from(req: UpdateReservationRequest) -> Self {
        Self {
            guest_name: req.guest_name,
            guest_email: req.guest_email,
            arrival_date: req.arrival_date,
            departure_date: req.departure_date,
            hotel_id: req.hotel,
        }
    }
}

/// A reservation that passed every check and is ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedReservation {
    pub hotel_id: Uuid,
    pub guest_name: String,
    pub guest_email: String,
    pub arrival_date: NaiveDateTime,
    pub departure_date: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReservationValidator {
    calculator: AvailabilityCalculator,
}

impl ReservationValidator {
    pub fn new(normalizer: DateNormalizer) -> Self {
        Self {
            calculator: AvailabilityCalculator::new(normalizer),
        }
    }

    pub fn calculator(&self) -> &AvailabilityCalculator {
        &self.calculator
    }

    /// Accepts or rejects a reservation create (`existing` is `None`) or update.
    ///
    /// Nothing is written here. The store must be the same unit of work the
    /// caller writes through afterwards, otherwise the availability count can
    /// be stale by the time the write lands.
    pub async fn validate<S>(
        &self,
        store: &mut S,
        candidate: &ReservationCandidate,
        existing: Option<&Reservation>,
    ) -> StayResult<ValidatedReservation>
    where
        S: ReservationStore + ?Sized,
    {
        let guest_name = candidate
            .guest_name
            .clone()
            .or_else(|| existing.map(|r| r.guest_name.clone()))
            .ok_or_else(|| StayError::field("guest_name", REQUIRED))?;
        let guest_email = candidate
            .guest_email
            .clone()
            .or_else(|| existing.map(|r| r.guest_email.clone()))
            .ok_or_else(|| StayError::field("guest_email", REQUIRED))?;

        let start = self.resolve_date(
            candidate.arrival_date.as_deref(),
            existing.map(|r| r.arrival_date),
            StayBoundary::Arrival,
        )?;
        let end = self.resolve_date(
            candidate.departure_date.as_deref(),
            existing.map(|r| r.departure_date),
            StayBoundary::Departure,
        )?;

        if end <= start {
            return Err(StayError::InvalidDateOrder);
        }

        let hotel = match existing {
            Some(reservation) => {
                if candidate
                    .hotel_id
                    .is_some_and(|requested| requested != reservation.hotel_id)
                {
                    return Err(StayError::field(
                        "hotel",
                        "Hotel can not be changed for a reservation.",
                    ));
                }
                store
                    .get_hotel(reservation.hotel_id)
                    .await?
                    .ok_or(StayError::HotelNotFound(reservation.hotel_id))?
            }
            None => {
                let hotel_id = candidate
                    .hotel_id
                    .ok_or_else(|| StayError::field("hotel", REQUIRED))?;
                store
                    .get_hotel(hotel_id)
                    .await?
                    .ok_or(StayError::HotelNotFound(hotel_id))?
            }
        };

        // The reservation being updated must not count against itself.
        let excluded = existing.map(|r| r.id);
        let reservations = store.list_reservations_for_hotel(hotel.id).await?;
        let slots = self.calculator.available_slots(
            &hotel,
            reservations.iter().filter(|r| Some(r.id) != excluded),
            Some(start),
            Some(end),
        )?;

        if slots <= 0 {
            return Err(StayError::NoAvailability { start, end });
        }

        Ok(ValidatedReservation {
            hotel_id: hotel.id,
            guest_name,
            guest_email,
            arrival_date: start,
            departure_date: end,
        })
    }

    fn resolve_date(
        &self,
        supplied: Option<&str>,
        current: Option<NaiveDateTime>,
        boundary: StayBoundary,
    ) -> StayResult<NaiveDateTime> {
        let field = match boundary {
            StayBoundary::Arrival => "arrival_date",
            StayBoundary::Departure => "departure_date",
        };
        let resolved = match supplied {
            Some(raw) => self.calculator.normalizer().normalize_input(Some(raw), boundary),
            None => current.map(strip_subseconds),
        };
        resolved.ok_or(StayError::InvalidDateFormat { field })
    }
}

/// Hotel fields as supplied by a client. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelCandidate {
    pub name: Option<String>,
    pub room_capacity: Option<i32>,
    pub over_booking_capacity: Option<i32>,
}

impl From<CreateHotelRequest> for HotelCandidate {
    fn from(req: CreateHotelRequest) -> Self {
        Self {
            name: req.name,
            room_capacity: req.room_capacity,
            over_booking_capacity: Some(req.over_booking_capacity),
        }
    }
}

impl From<UpdateHotelRequest> for HotelCandidate {
    fn from(req: UpdateHotelRequest) -> Self {
        Self {
            name: req.name,
            room_capacity: req.room_capacity,
            over_booking_capacity: req.over_booking_capacity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelDraft {
    pub name: String,
    pub room_capacity: i32,
    pub over_booking_capacity: i32,
}

/// Merges `candidate` onto `existing` and checks the capacity invariants.
pub fn validate_hotel(candidate: &HotelCandidate, existing: Option<&Hotel>) -> StayResult<HotelDraft> {
    let name = candidate
        .name
        .clone()
        .or_else(|| existing.map(|h| h.name.clone()))
        .ok_or_else(|| StayError::field("name", REQUIRED))?;
    let room_capacity = candidate
        .room_capacity
        .or_else(|| existing.map(|h| h.room_capacity))
        .ok_or_else(|| StayError::field("room_capacity", REQUIRED))?;
    let over_booking_capacity = candidate
        .over_booking_capacity
        .or_else(|| existing.map(|h| h.over_booking_capacity))
        .unwrap_or(0);

    if room_capacity < 1 {
        return Err(StayError::InvalidCapacity(room_capacity));
    }
    if over_booking_capacity < 0 {
        return Err(StayError::field(
            "over_booking_capacity",
            "Ensure this value is greater than or equal to 0.",
        ));
    }

    Ok(HotelDraft {
        name,
        room_capacity,
        over_booking_capacity,
    })
}
