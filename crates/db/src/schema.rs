use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create hotels table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS hotels (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            room_capacity INTEGER NOT NULL,
            over_booking_capacity INTEGER NOT NULL DEFAULT 0,
            CONSTRAINT positive_room_capacity CHECK (room_capacity >= 1),
            CONSTRAINT non_negative_over_booking CHECK (over_booking_capacity >= 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create reservations table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reservations (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            hotel_id UUID NOT NULL REFERENCES hotels(id) ON DELETE CASCADE,
            guest_name VARCHAR(255) NOT NULL,
            guest_email VARCHAR(254) NOT NULL,
            arrival_date TIMESTAMP NOT NULL,
            departure_date TIMESTAMP NOT NULL,
            created_time TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            last_modified_time TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_stay_range CHECK (departure_date > arrival_date)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes, one statement per query
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_reservations_hotel_id ON reservations(hotel_id)",
        "CREATE INDEX IF NOT EXISTS idx_reservations_arrival_date ON reservations(arrival_date)",
        "CREATE INDEX IF NOT EXISTS idx_reservations_departure_date ON reservations(departure_date)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
