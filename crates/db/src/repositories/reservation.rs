use crate::models::{DbReservation, DbReservationDetail};
use chrono::Utc;
use eyre::Result;
use sqlx::PgExecutor;
use staysync_core::validation::ValidatedReservation;
use uuid::Uuid;

const DETAIL_COLUMNS: &str = r#"
    r.id, r.hotel_id, r.guest_name, r.guest_email, r.arrival_date, r.departure_date,
    r.created_time, r.last_modified_time,
    h.name AS hotel_name,
    h.room_capacity AS hotel_room_capacity,
    h.over_booking_capacity AS hotel_over_booking_capacity
"#;

pub async fn create_reservation<'e>(
    executor: impl PgExecutor<'e>,
    reservation: &ValidatedReservation,
) -> Result<DbReservation> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating reservation: id={}, hotel_id={}, arrival={}, departure={}",
        id, reservation.hotel_id, reservation.arrival_date, reservation.departure_date
    );

    let created = sqlx::query_as::<_, DbReservation>(
        r#"
        INSERT INTO reservations
            (id, hotel_id, guest_name, guest_email, arrival_date, departure_date,
             created_time, last_modified_time)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
        RETURNING id, hotel_id, guest_name, guest_email, arrival_date, departure_date,
                  created_time, last_modified_time
        "#,
    )
    .bind(id)
    .bind(reservation.hotel_id)
    .bind(&reservation.guest_name)
    .bind(&reservation.guest_email)
    .bind(reservation.arrival_date)
    .bind(reservation.departure_date)
    .bind(now)
    .fetch_one(executor)
    .await?;

    Ok(created)
}

pub async fn update_reservation<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    reservation: &ValidatedReservation,
) -> Result<Option<DbReservation>> {
    let updated = sqlx::query_as::<_, DbReservation>(
        r#"
        UPDATE reservations
        SET guest_name = $2, guest_email = $3, arrival_date = $4, departure_date = $5,
            last_modified_time = $6
        WHERE id = $1
        RETURNING id, hotel_id, guest_name, guest_email, arrival_date, departure_date,
                  created_time, last_modified_time
        "#,
    )
    .bind(id)
    .bind(&reservation.guest_name)
    .bind(&reservation.guest_email)
    .bind(reservation.arrival_date)
    .bind(reservation.departure_date)
    .bind(Utc::now())
    .fetch_optional(executor)
    .await?;

    Ok(updated)
}

pub async fn get_reservation_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> Result<Option<DbReservation>> {
    let reservation = sqlx::query_as::<_, DbReservation>(
        r#"
        SELECT id, hotel_id, guest_name, guest_email, arrival_date, departure_date,
               created_time, last_modified_time
        FROM reservations
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(reservation)
}

pub async fn get_reservation_detail<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> Result<Option<DbReservationDetail>> {
    let query = format!(
        "SELECT {DETAIL_COLUMNS} FROM reservations r JOIN hotels h ON h.id = r.hotel_id WHERE r.id = $1"
    );
    let detail = sqlx::query_as::<_, DbReservationDetail>(&query)
        .bind(id)
        .fetch_optional(executor)
        .await?;

    Ok(detail)
}

pub async fn list_reservation_details<'e>(
    executor: impl PgExecutor<'e>,
    limit: i64,
    offset: i64,
) -> Result<Vec<DbReservationDetail>> {
    let query = format!(
        "SELECT {DETAIL_COLUMNS} FROM reservations r JOIN hotels h ON h.id = r.hotel_id \
         ORDER BY r.arrival_date ASC, r.id ASC LIMIT $1 OFFSET $2"
    );
    let details = sqlx::query_as::<_, DbReservationDetail>(&query)
        .bind(limit)
        .bind(offset)
        .fetch_all(executor)
        .await?;

    Ok(details)
}

pub async fn count_reservations<'e>(executor: impl PgExecutor<'e>) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reservations")
        .fetch_one(executor)
        .await?;

    Ok(count)
}

pub async fn get_reservations_by_hotel_id<'e>(
    executor: impl PgExecutor<'e>,
    hotel_id: Uuid,
) -> Result<Vec<DbReservation>> {
    let reservations = sqlx::query_as::<_, DbReservation>(
        r#"
        SELECT id, hotel_id, guest_name, guest_email, arrival_date, departure_date,
               created_time, last_modified_time
        FROM reservations
        WHERE hotel_id = $1
        ORDER BY arrival_date ASC
        "#,
    )
    .bind(hotel_id)
    .fetch_all(executor)
    .await?;

    Ok(reservations)
}

pub async fn delete_reservation<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM reservations
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}
