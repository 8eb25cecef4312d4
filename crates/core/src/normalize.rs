//! # Date Normalization
//!
//! Guests book whole days, but overlap arithmetic needs exact timestamps.
//! Every arrival is pinned to the hotel check-in time and every departure to
//! the check-out time, whatever time of day the client happened to send.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound};
use serde::{Deserialize, Deserializer};

/// Default check-in time applied to arrival dates.
pub const DEFAULT_CHECK_IN: NaiveTime = hms(11, 0, 0);

/// Default check-out time applied to departure dates.
pub const DEFAULT_CHECK_OUT: NaiveTime = hms(10, 0, 0);

const fn hms(hour: u32, min: u32, sec: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, min, sec) {
        Some(time) => time,
        None => panic!("invalid time of day"),
    }
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Which end of a stay a timestamp describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StayBoundary {
    Arrival,
    Departure,
}

/// Pins timestamps to the configured check-in/check-out times.
///
/// The times are process-wide policy; the value is immutable once built, so
/// tests construct their own instead of touching shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateNormalizer {
    check_in: NaiveTime,
    check_out: NaiveTime,
}

impl Default for DateNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_CHECK_IN, DEFAULT_CHECK_OUT)
    }
}

impl DateNormalizer {
    pub fn new(check_in: NaiveTime, check_out: NaiveTime) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    /// Like [`new`](Self::new) but rejects a check-out time that is not
    /// strictly earlier than the check-in time.
    ///
    /// With such times a same-day stay would normalize to a non-empty range
    /// and back-to-back stays would overlap.
    pub fn try_new(check_in: NaiveTime, check_out: NaiveTime) -> eyre::Result<Self> {
        if check_out >= check_in {
            eyre::bail!(
                "check-out time {} must be earlier than check-in time {}",
                check_out,
                check_in
            );
        }
        Ok(Self::new(check_in, check_out))
    }

    pub fn check_in(&self) -> NaiveTime {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveTime {
        self.check_out
    }

    /// Normalizes an optional timestamp.
    ///
    /// Returns `None` when there is nothing to normalize; callers must treat
    /// that as invalid input.
    pub fn normalize(
        &self,
        timestamp: Option<NaiveDateTime>,
        boundary: StayBoundary,
    ) -> Option<NaiveDateTime> {
        timestamp.map(|ts| self.normalize_datetime(ts, boundary))
    }

    /// Parses raw client input and normalizes it in one step.
    ///
    /// Absent, empty and unparseable input all yield `None`.
    pub fn normalize_input(&self, raw: Option<&str>, boundary: StayBoundary) -> Option<NaiveDateTime> {
        self.normalize(raw.and_then(parse_timestamp), boundary)
    }

    /// Keeps the calendar date and replaces the time of day.
    pub fn normalize_datetime(&self, timestamp: NaiveDateTime, boundary: StayBoundary) -> NaiveDateTime {
        let time = match boundary {
            StayBoundary::Arrival => self.check_in,
            StayBoundary::Departure => self.check_out,
        };
        timestamp.date().and_time(time)
    }
}

/// Parses the timestamp formats accepted on the wire.
///
/// RFC 3339 values keep the wall-clock date of their own offset so that a
/// guest arriving "on the 26th" stays on the 26th.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(hms(0, 0, 0)))
        })
}

/// Drops sub-second precision so persisted and supplied values compare cleanly.
pub fn strip_subseconds(timestamp: NaiveDateTime) -> NaiveDateTime {
    timestamp.trunc_subsecs(0)
}

/// Lenient deserializer for timestamp fields.
///
/// Any JSON value is accepted: strings pass through, `null` becomes `None`,
/// and other types are kept in their JSON form so they fail normalization
/// instead of failing the whole request body.
pub fn deserialize_raw_timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
