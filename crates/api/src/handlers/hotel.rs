use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use staysync_core::{
    errors::StayError,
    models::{
        hotel::{CreateHotelRequest, Hotel, HotelResponse, UpdateHotelRequest},
        page::{Page, PageQuery},
    },
    validation::{validate_hotel, HotelCandidate},
};
use staysync_db::repositories::hotel as hotel_repo;
use tracing::info;
use uuid::Uuid;

use crate::{
    middleware::{client_ip::ClientIp, error_handling::AppError, validated_json::ValidatedJson},
    ApiState,
};

fn hotel_not_found(id: Uuid) -> StayError {
    StayError::NotFound(format!("Hotel with ID {} not found", id))
}

#[axum::debug_handler]
pub async fn list_hotels(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<HotelResponse>>, AppError> {
    let window = query.resolve(state.page_size);

    let count = hotel_repo::count_hotels(&state.db_pool).await?;
    let hotels = hotel_repo::list_hotels(&state.db_pool, window.limit(), window.offset()).await?;

    let results = hotels
        .into_iter()
        .map(|row| HotelResponse::from(Hotel::from(row)))
        .collect();

    Ok(Json(Page::new("/api/hotels", window, count, results)))
}

#[axum::debug_handler]
pub async fn create_hotel(
    State(state): State<Arc<ApiState>>,
    client_ip: ClientIp,
    ValidatedJson(payload): ValidatedJson<CreateHotelRequest>,
) -> Result<(StatusCode, Json<HotelResponse>), AppError> {
    let draft = validate_hotel(&HotelCandidate::from(payload), None)?;
    let hotel = Hotel::from(hotel_repo::create_hotel(&state.db_pool, &draft).await?);

    info!(client_ip = %client_ip, hotel_id = %hotel.id, "hotel created");
    Ok((StatusCode::CREATED, Json(hotel.into())))
}

#[axum::debug_handler]
pub async fn get_hotel(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<HotelResponse>, AppError> {
    let hotel = hotel_repo::get_hotel_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| hotel_not_found(id))?;

    Ok(Json(Hotel::from(hotel).into()))
}

/// `PUT`: every field must be supplied.
#[axum::debug_handler]
pub async fn replace_hotel(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    client_ip: ClientIp,
    ValidatedJson(payload): ValidatedJson<CreateHotelRequest>,
) -> Result<Json<HotelResponse>, AppError> {
    let hotel = apply_hotel_update(&state, id, HotelCandidate::from(payload)).await?;

    info!(client_ip = %client_ip, hotel_id = %id, "hotel replaced");
    Ok(Json(hotel.into()))
}

/// `PATCH`: omitted fields keep their current value.
#[axum::debug_handler]
pub async fn patch_hotel(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    client_ip: ClientIp,
    ValidatedJson(payload): ValidatedJson<UpdateHotelRequest>,
) -> Result<Json<HotelResponse>, AppError> {
    let hotel = apply_hotel_update(&state, id, HotelCandidate::from(payload)).await?;

    info!(client_ip = %client_ip, hotel_id = %id, "hotel updated");
    Ok(Json(hotel.into()))
}

async fn apply_hotel_update(
    state: &ApiState,
    id: Uuid,
    candidate: HotelCandidate,
) -> Result<Hotel, AppError> {
    let mut tx = state.db_pool.begin().await?;

    let existing = hotel_repo::lock_hotel_by_id(&mut *tx, id)
        .await?
        .map(Hotel::from)
        .ok_or_else(|| hotel_not_found(id))?;
    let draft = validate_hotel(&candidate, Some(&existing))?;
    let updated = hotel_repo::update_hotel(&mut *tx, id, &draft)
        .await?
        .ok_or_else(|| hotel_not_found(id))?;

    tx.commit().await?;
    Ok(updated.into())
}

/// Removes the hotel together with all of its reservations.
#[axum::debug_handler]
pub async fn delete_hotel(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    client_ip: ClientIp,
) -> Result<StatusCode, AppError> {
    if !hotel_repo::delete_hotel(&state.db_pool, id).await? {
        return Err(hotel_not_found(id).into());
    }

    info!(client_ip = %client_ip, hotel_id = %id, "hotel deleted");
    Ok(StatusCode::NO_CONTENT)
}
