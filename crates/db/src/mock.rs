use async_trait::async_trait;
use mockall::mock;
use staysync_core::{
    errors::StayResult,
    models::{hotel::Hotel, reservation::Reservation},
    store::ReservationStore,
    validation::ValidatedReservation,
};
use uuid::Uuid;

// Mock store for testing service and handler flows without Postgres
mock! {
    pub Store {}

    #[async_trait]
    impl ReservationStore for Store {
        async fn get_hotel(&mut self, id: Uuid) -> StayResult<Option<Hotel>>;

        async fn get_reservation(&mut self, id: Uuid) -> StayResult<Option<Reservation>>;

        async fn list_reservations_for_hotel(&mut self, hotel_id: Uuid) -> StayResult<Vec<Reservation>>;

        async fn insert_reservation(&mut self, reservation: &ValidatedReservation) -> StayResult<Reservation>;

        async fn update_reservation(
            &mut self,
            id: Uuid,
            reservation: &ValidatedReservation,
        ) -> StayResult<Reservation>;

        async fn delete_reservation(&mut self, id: Uuid) -> StayResult<bool>;
    }
}
