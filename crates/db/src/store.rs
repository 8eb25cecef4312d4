use async_trait::async_trait;
use sqlx::PgConnection;
use staysync_core::{
    errors::{StayError, StayResult},
    models::{hotel::Hotel, reservation::Reservation},
    store::ReservationStore,
    validation::ValidatedReservation,
};
use uuid::Uuid;

use crate::repositories::{hotel, reservation};

/// [`ReservationStore`] over a single Postgres connection.
///
/// Callers hand in the connection of an open transaction. `get_hotel` takes
/// the hotel row lock, which is held until that transaction commits or rolls
/// back.
pub struct PgReservationStore<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> PgReservationStore<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl ReservationStore for PgReservationStore<'_> {
    async fn get_hotel(&mut self, id: Uuid) -> StayResult<Option<Hotel>> {
        let row = hotel::lock_hotel_by_id(&mut *self.conn, id).await?;
        Ok(row.map(Hotel::from))
    }

    async fn get_reservation(&mut self, id: Uuid) -> StayResult<Option<Reservation>> {
        let row = reservation::get_reservation_by_id(&mut *self.conn, id).await?;
        Ok(row.map(Reservation::from))
    }

    async fn list_reservations_for_hotel(&mut self, hotel_id: Uuid) -> StayResult<Vec<Reservation>> {
        let rows = reservation::get_reservations_by_hotel_id(&mut *self.conn, hotel_id).await?;
        Ok(rows.into_iter().map(Reservation::from).collect())
    }

    async fn insert_reservation(&mut self, draft: &ValidatedReservation) -> StayResult<Reservation> {
        let row = reservation::create_reservation(&mut *self.conn, draft).await?;
        Ok(row.into())
    }

    async fn update_reservation(
        &mut self,
        id: Uuid,
        draft: &ValidatedReservation,
    ) -> StayResult<Reservation> {
        reservation::update_reservation(&mut *self.conn, id, draft)
            .await?
            .map(Reservation::from)
            .ok_or_else(|| StayError::NotFound(format!("Reservation with ID {} not found", id)))
    }

    async fn delete_reservation(&mut self, id: Uuid) -> StayResult<bool> {
        Ok(reservation::delete_reservation(&mut *self.conn, id).await?)
    }
}
