use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    errors::StayResult,
    models::{hotel::Hotel, reservation::Reservation},
    validation::ValidatedReservation,
};

/// Persistence handle the reservation service validates and writes through.
///
/// An implementation is bound to one unit of work. Reads made through it must
/// see the state the following write will be committed against, and
/// concurrent writers for the same hotel must not interleave between
/// [`get_hotel`](Self::get_hotel) and the write. The Postgres store gets this
/// by locking the hotel row inside a transaction.
#[async_trait]
pub trait ReservationStore: Send {
    async fn get_hotel(&mut self, id: Uuid) -> StayResult<Option<Hotel>>;

    async fn get_reservation(&mut self, id: Uuid) -> StayResult<Option<Reservation>>;

    async fn list_reservations_for_hotel(&mut self, hotel_id: Uuid) -> StayResult<Vec<Reservation>>;

    async fn insert_reservation(&mut self, reservation: &ValidatedReservation) -> StayResult<Reservation>;

    async fn update_reservation(
        &mut self,
        id: Uuid,
        reservation: &ValidatedReservation,
    ) -> StayResult<Reservation>;

    /// Returns false when no reservation with `id` existed.
    async fn delete_reservation(&mut self, id: Uuid) -> StayResult<bool>;
}
