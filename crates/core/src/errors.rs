use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use thiserror::Error;
use uuid::Uuid;

/// Key used for validation messages that do not belong to a single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Field name to list of messages, the shape returned to API clients.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Error, Debug)]
pub enum StayError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {}", summarize(.0))]
    Validation(FieldErrors),

    #[error("Invalid date format for {field}")]
    InvalidDateFormat { field: &'static str },

    #[error("Departure date cannot be prior to or the same as the arrival date")]
    InvalidDateOrder,

    #[error("Hotel with ID {0} does not exist")]
    HotelNotFound(Uuid),

    #[error("Sorry, no reservations available between {start} and {end}")]
    NoAvailability {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Room capacity must be at least 1, got {0}")]
    InvalidCapacity(i32),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type StayResult<T> = Result<T, StayError>;

impl StayError {
    /// Builds a validation error carrying a single message for `field`.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), vec![message.into()]);
        StayError::Validation(errors)
    }

    /// Builds a validation error that is not tied to a field.
    pub fn non_field(message: impl Into<String>) -> Self {
        Self::field(NON_FIELD_ERRORS, message)
    }

    /// True for every kind that is the caller's fault and reported as a bad request.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StayError::Validation(_)
                | StayError::InvalidDateFormat { .. }
                | StayError::InvalidDateOrder
                | StayError::HotelNotFound(_)
                | StayError::NoAvailability { .. }
                | StayError::InvalidCapacity(_)
        )
    }

    /// Structured payload for validation kinds, `None` for everything else.
    pub fn field_errors(&self) -> Option<FieldErrors> {
        let (field, message) = match self {
            StayError::Validation(errors) => return Some(errors.clone()),
            StayError::InvalidDateFormat { field } => (
                *field,
                "Datetime has wrong format. Use YYYY-MM-DD or YYYY-MM-DDThh:mm[:ss]".to_string(),
            ),
            StayError::InvalidDateOrder | StayError::NoAvailability { .. } => {
                (NON_FIELD_ERRORS, self.to_string())
            }
            StayError::HotelNotFound(_) => ("hotel", self.to_string()),
            StayError::InvalidCapacity(_) => (
                "room_capacity",
                "Ensure this value is greater than or equal to 1.".to_string(),
            ),
            _ => return None,
        };

        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), vec![message]);
        Some(errors)
    }
}

impl From<validator::ValidationErrors> for StayError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => default_message(&e.code),
                })
                .collect();
            fields.insert(field.to_string(), messages);
        }
        StayError::Validation(fields)
    }
}

fn default_message(code: &str) -> String {
    match code {
        "required" => "This field is required.".to_string(),
        "email" => "Enter a valid email address.".to_string(),
        "length" => "Ensure this field has between 1 and 255 characters.".to_string(),
        "range" => "Ensure this value is within the allowed range.".to_string(),
        other => format!("Invalid value ({other})."),
    }
}

fn summarize(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, messages)| format!("{}: {}", field, messages.join(" ")))
        .collect::<Vec<_>>()
        .join("; ")
}
