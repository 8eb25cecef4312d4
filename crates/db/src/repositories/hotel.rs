use crate::models::DbHotel;
use eyre::Result;
use sqlx::PgExecutor;
use staysync_core::validation::HotelDraft;
use uuid::Uuid;

pub async fn create_hotel<'e>(executor: impl PgExecutor<'e>, draft: &HotelDraft) -> Result<DbHotel> {
    let id = Uuid::new_v4();

    tracing::debug!(
        "Creating hotel: id={}, name={}, room_capacity={}, over_booking_capacity={}",
        id, draft.name, draft.room_capacity, draft.over_booking_capacity
    );

    let hotel = sqlx::query_as::<_, DbHotel>(
        r#"
        INSERT INTO hotels (id, name, room_capacity, over_booking_capacity)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, room_capacity, over_booking_capacity
        "#,
    )
    .bind(id)
    .bind(&draft.name)
    .bind(draft.room_capacity)
    .bind(draft.over_booking_capacity)
    .fetch_one(executor)
    .await?;

    Ok(hotel)
}

pub async fn get_hotel_by_id<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> Result<Option<DbHotel>> {
    let hotel = sqlx::query_as::<_, DbHotel>(
        r#"
        SELECT id, name, room_capacity, over_booking_capacity
        FROM hotels
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(hotel)
}

/// Same as [`get_hotel_by_id`] but holds a row lock until the transaction ends.
///
/// Every reservation write for a hotel takes this lock first, so two writers
/// for the same hotel can never both count the same free slot.
pub async fn lock_hotel_by_id<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> Result<Option<DbHotel>> {
    let hotel = sqlx::query_as::<_, DbHotel>(
        r#"
        SELECT id, name, room_capacity, over_booking_capacity
        FROM hotels
        WHERE id = $1
        FOR UPDATE
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    if hotel.is_none() {
        tracing::debug!("Hotel not found for locking: id={}", id);
    }

    Ok(hotel)
}

pub async fn list_hotels<'e>(executor: impl PgExecutor<'e>, limit: i64, offset: i64) -> Result<Vec<DbHotel>> {
    let hotels = sqlx::query_as::<_, DbHotel>(
        r#"
        SELECT id, name, room_capacity, over_booking_capacity
        FROM hotels
        ORDER BY name ASC, id ASC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(executor)
    .await?;

    Ok(hotels)
}

pub async fn count_hotels<'e>(executor: impl PgExecutor<'e>) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM hotels")
        .fetch_one(executor)
        .await?;

    Ok(count)
}

pub async fn update_hotel<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    draft: &HotelDraft,
) -> Result<Option<DbHotel>> {
    let hotel = sqlx::query_as::<_, DbHotel>(
        r#"
        UPDATE hotels
        SET name = $2, room_capacity = $3, over_booking_capacity = $4
        WHERE id = $1
        RETURNING id, name, room_capacity, over_booking_capacity
        "#,
    )
    .bind(id)
    .bind(&draft.name)
    .bind(draft.room_capacity)
    .bind(draft.over_booking_capacity)
    .fetch_optional(executor)
    .await?;

    Ok(hotel)
}

/// Deletes the hotel and, through the foreign key, all of its reservations.
pub async fn delete_hotel<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM hotels
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}
