//! # Availability Calculation
//!
//! A hotel can hold `effective_capacity` reservations at once. The number of
//! free slots for a candidate stay is that capacity minus every existing
//! reservation whose stay overlaps the candidate's.
//!
//! Overlap is decided by six cases, evaluated on normalized timestamps. For
//! well-formed ranges (arrival before departure on both sides) they are
//! equivalent to `arrival < end && departure > start`; the cases are kept
//! explicit so each boundary is visible:
//!
//! 1. same arrival as the candidate
//! 2. same departure as the candidate
//! 3. starts before, ends inside
//! 4. starts inside, ends after
//! 5. strictly inside
//! 6. strictly around

use chrono::NaiveDateTime;
use tracing::debug;

use crate::{
    errors::{StayError, StayResult},
    models::{hotel::Hotel, reservation::Reservation},
    normalize::{DateNormalizer, StayBoundary},
};

/// Returns true when an existing stay overlaps the candidate `[start, end]`.
pub fn overlaps(
    arrival: NaiveDateTime,
    departure: NaiveDateTime,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> bool {
    arrival == start
        || departure == end
        || (arrival < start && departure > start && departure < end)
        || (arrival < end && departure > end && arrival > start)
        || (arrival > start && departure < end)
        || (arrival < start && departure > end)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AvailabilityCalculator {
    normalizer: DateNormalizer,
}

impl AvailabilityCalculator {
    pub fn new(normalizer: DateNormalizer) -> Self {
        Self { normalizer }
    }

    pub fn normalizer(&self) -> &DateNormalizer {
        &self.normalizer
    }

    /// Remaining reservation slots at `hotel` for the given stay.
    ///
    /// `reservations` is the hotel's current reservation set, read by the
    /// caller at call time. Both dates are normalized first; an absent date
    /// fails with [`StayError::InvalidDateFormat`]. The result may be zero or
    /// negative, both of which mean no slot is free.
    pub fn available_slots<'a, I>(
        &self,
        hotel: &Hotel,
        reservations: I,
        start_date: Option<NaiveDateTime>,
        end_date: Option<NaiveDateTime>,
    ) -> StayResult<i64>
    where
        I: IntoIterator<Item = &'a Reservation>,
    {
        let start = self
            .normalizer
            .normalize(start_date, StayBoundary::Arrival)
            .ok_or(StayError::InvalidDateFormat {
                field: "arrival_date",
            })?;
        let end = self
            .normalizer
            .normalize(end_date, StayBoundary::Departure)
            .ok_or(StayError::InvalidDateFormat {
                field: "departure_date",
            })?;

        let capacity = hotel.effective_capacity();
        let overlapping = reservations
            .into_iter()
            .filter(|r| r.hotel_id == hotel.id)
            .filter(|r| overlaps(r.arrival_date, r.departure_date, start, end))
            .count() as i64;

        debug!(
            hotel_id = %hotel.id,
            %start,
            %end,
            capacity,
            overlapping,
            "computed available slots"
        );

        Ok(capacity - overlapping)
    }
}
