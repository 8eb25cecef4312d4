//! Reservation endpoints.
//!
//! Creates and updates run the reservation service inside one transaction,
//! through a store that locks the hotel row before counting its reservations.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use sqlx::PgConnection;
use std::sync::Arc;
use staysync_core::{
    errors::StayError,
    models::{
        page::{Page, PageQuery},
        reservation::{CreateReservationRequest, ReservationResponse, UpdateReservationRequest},
    },
    validation::ReservationCandidate,
};
use staysync_db::{repositories::reservation as reservation_repo, store::PgReservationStore};
use tracing::info;
use uuid::Uuid;

use crate::{
    middleware::{client_ip::ClientIp, error_handling::AppError, validated_json::ValidatedJson},
    ApiState,
};

fn reservation_not_found(id: Uuid) -> StayError {
    StayError::NotFound(format!("Reservation with ID {} not found", id))
}

async fn load_response(conn: &mut PgConnection, id: Uuid) -> Result<ReservationResponse, AppError> {
    let (reservation, hotel) = reservation_repo::get_reservation_detail(conn, id)
        .await?
        .ok_or_else(|| reservation_not_found(id))?
        .into_parts();

    Ok(ReservationResponse::new(reservation, hotel))
}

#[axum::debug_handler]
pub async fn list_reservations(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<ReservationResponse>>, AppError> {
    let window = query.resolve(state.page_size);

    let count = reservation_repo::count_reservations(&state.db_pool).await?;
    let details =
        reservation_repo::list_reservation_details(&state.db_pool, window.limit(), window.offset())
            .await?;

    let results = details
        .into_iter()
        .map(|detail| {
            let (reservation, hotel) = detail.into_parts();
            ReservationResponse::new(reservation, hotel)
        })
        .collect();

    Ok(Json(Page::new("/api/reservations", window, count, results)))
}

#[axum::debug_handler]
pub async fn create_reservation(
    State(state): State<Arc<ApiState>>,
    client_ip: ClientIp,
    ValidatedJson(payload): ValidatedJson<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ReservationResponse>), AppError> {
    let candidate = ReservationCandidate::from(payload);
    let mut tx = state.db_pool.begin().await?;

    let created = {
        let mut store = PgReservationStore::new(&mut *tx);
        state.reservations.create(&mut store, &candidate).await?
    };
    let response = load_response(&mut *tx, created.id).await?;

    tx.commit().await?;

    info!(
        client_ip = %client_ip,
        reservation_id = %created.id,
        hotel_id = %created.hotel_id,
        "reservation created"
    );
    Ok((StatusCode::CREATED, Json(response)))
}

#[axum::debug_handler]
pub async fn get_reservation(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReservationResponse>, AppError> {
    let mut conn = state.db_pool.acquire().await?;
    let response = load_response(&mut *conn, id).await?;

    Ok(Json(response))
}

/// `PUT`: every field must be supplied.
#[axum::debug_handler]
pub async fn replace_reservation(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    client_ip: ClientIp,
    ValidatedJson(payload): ValidatedJson<CreateReservationRequest>,
) -> Result<Json<ReservationResponse>, AppError> {
    let response = apply_reservation_update(&state, id, payload.into()).await?;

    info!(client_ip = %client_ip, reservation_id = %id, "reservation replaced");
    Ok(Json(response))
}

/// `PATCH`: omitted fields keep their current value.
#[axum::debug_handler]
pub async fn patch_reservation(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    client_ip: ClientIp,
    ValidatedJson(payload): ValidatedJson<UpdateReservationRequest>,
) -> Result<Json<ReservationResponse>, AppError> {
    let response = apply_reservation_update(&state, id, payload.into()).await?;

    info!(client_ip = %client_ip, reservation_id = %id, "reservation updated");
    Ok(Json(response))
}

async fn apply_reservation_update(
    state: &ApiState,
    id: Uuid,
    candidate: ReservationCandidate,
) -> Result<ReservationResponse, AppError> {
    let mut tx = state.db_pool.begin().await?;

    {
        let mut store = PgReservationStore::new(&mut *tx);
        state.reservations.update(&mut store, id, &candidate).await?;
    }
    let response = load_response(&mut *tx, id).await?;

    tx.commit().await?;
    Ok(response)
}

#[axum::debug_handler]
pub async fn delete_reservation(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    client_ip: ClientIp,
) -> Result<StatusCode, AppError> {
    let mut conn = state.db_pool.acquire().await?;
    let mut store = PgReservationStore::new(&mut *conn);
    state.reservations.delete(&mut store, id).await?;

    info!(client_ip = %client_ip, reservation_id = %id, "reservation deleted");
    Ok(StatusCode::NO_CONTENT)
}
