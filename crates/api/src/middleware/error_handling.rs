//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON bodies. Validation kinds
//! become `400` with a field-to-messages map, unresolved path ids become `404`
//! with `{"error": ...}`, and infrastructure failures become a logged `500`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use staysync_core::errors::StayError;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use staysync_api::middleware::error_handling::AppError;
/// use staysync_core::errors::StayError;
///
/// async fn handler(room_capacity: i32) -> Result<Json<i32>, AppError> {
///     if room_capacity < 1 {
///         return Err(StayError::InvalidCapacity(room_capacity).into());
///     }
///     Ok(Json(room_capacity))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub StayError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(fields) = self.0.field_errors() {
            return (StatusCode::BAD_REQUEST, Json(fields)).into_response();
        }

        let status = match &self.0 {
            StayError::NotFound(_) => StatusCode::NOT_FOUND,
            StayError::Database(report) => {
                error!(error = ?report, "database failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            other => {
                error!(error = %other, "unhandled error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = match &self.0 {
            StayError::NotFound(message) => message.clone(),
            _ => "Internal server error".to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Automatic conversion from StayError to AppError
impl From<StayError> for AppError {
    fn from(err: StayError) -> Self {
        AppError(err)
    }
}

/// Wraps infrastructure reports in `StayError::Database`.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(StayError::Database(err))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError(StayError::Database(err.into()))
    }
}

/// Maps a StayError to an HTTP response
pub fn map_error(err: StayError) -> Response {
    AppError(err).into_response()
}
