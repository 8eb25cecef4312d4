//! `Json` extractor that also runs `validator` checks.
//!
//! Malformed bodies are rejected with a `non_field_errors` entry, schema
//! violations with one entry per offending field. Both surface as `400`.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use staysync_core::errors::StayError;
use validator::Validate;

use crate::middleware::error_handling::AppError;

pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                StayError::non_field(format!("JSON parse error - {}", rejection.body_text()))
            })?;

        value.validate().map_err(StayError::from)?;

        Ok(ValidatedJson(value))
    }
}
