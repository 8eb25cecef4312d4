use tracing::info;
use uuid::Uuid;

use crate::{
    errors::{StayError, StayResult},
    models::reservation::Reservation,
    normalize::DateNormalizer,
    store::ReservationStore,
    validation::{ReservationCandidate, ReservationValidator},
};

/// Validate-then-write sequences for reservations.
///
/// Each call performs its reads and its write through the one store it is
/// given. A rejected candidate returns before the store is written to.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReservationService {
    validator: ReservationValidator,
}

impl ReservationService {
    pub fn new(normalizer: DateNormalizer) -> Self {
        Self {
            validator: ReservationValidator::new(normalizer),
        }
    }

    pub fn validator(&self) -> &ReservationValidator {
        &self.validator
    }

    pub async fn create<S>(&self, store: &mut S, candidate: &ReservationCandidate) -> StayResult<Reservation>
    where
        S: ReservationStore + ?Sized,
    {
        let validated = self.validator.validate(store, candidate, None).await?;
        let reservation = store.insert_reservation(&validated).await?;

        info!(
            reservation_id = %reservation.id,
            hotel_id = %reservation.hotel_id,
            arrival = %reservation.arrival_date,
            departure = %reservation.departure_date,
            "reservation created"
        );
        Ok(reservation)
    }

    pub async fn update<S>(
        &self,
        store: &mut S,
        id: Uuid,
        candidate: &ReservationCandidate,
    ) -> StayResult<Reservation>
    where
        S: ReservationStore + ?Sized,
    {
        let not_found = || StayError::NotFound(format!("Reservation with ID {} not found", id));
        let unlocked = store.get_reservation(id).await?.ok_or_else(not_found)?;

        // Take the hotel lock, then merge onto the reservation as it stands
        // under that lock so a concurrent update is not overwritten.
        store.get_hotel(unlocked.hotel_id).await?;
        let existing = store.get_reservation(id).await?.ok_or_else(not_found)?;

        let validated = self.validator.validate(store, candidate, Some(&existing)).await?;
        let reservation = store.update_reservation(id, &validated).await?;

        info!(reservation_id = %id, hotel_id = %reservation.hotel_id, "reservation updated");
        Ok(reservation)
    }

    pub async fn delete<S>(&self, store: &mut S, id: Uuid) -> StayResult<()>
    where
        S: ReservationStore + ?Sized,
    {
        if !store.delete_reservation(id).await? {
            return Err(StayError::NotFound(format!("Reservation with ID {} not found", id)));
        }

        info!(reservation_id = %id, "reservation deleted");
        Ok(())
    }
}
