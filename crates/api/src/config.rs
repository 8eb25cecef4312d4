//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the StaySync API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `API_PAGE_SIZE`: Default page size of list endpoints (default: 20)
//! - `CHECK_IN_TIME`: Time of day arrivals are normalized to (default: "11:00:00")
//! - `CHECK_OUT_TIME`: Time of day departures are normalized to (default: "10:00:00")

use chrono::NaiveTime;
use eyre::{Result, WrapErr};
use staysync_core::{
    models::page::MAX_PAGE_SIZE,
    normalize::{DateNormalizer, DEFAULT_CHECK_IN, DEFAULT_CHECK_OUT},
};
use std::env;
use tracing::Level;

/// Configuration for the StaySync API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use staysync_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Page size used when a list request does not name one
    pub page_size: u32,

    pub check_in_time: NaiveTime,
    pub check_out_time: NaiveTime,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    /// - The API_PAGE_SIZE value is not a number between 1 and 100
    /// - LOG_LEVEL is not one of trace, debug, info, warn or error
    /// - API_REQUEST_TIMEOUT_SECONDS is not a positive number of seconds
    /// - CHECK_IN_TIME or CHECK_OUT_TIME is not a valid time of day
    /// - CHECK_OUT_TIME is not earlier than CHECK_IN_TIME
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = env::var("DATABASE_URL")
            .wrap_err("DATABASE_URL environment variable must be set")?;

        // Logging settings
        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()))
            .wrap_err("Invalid LOG_LEVEL value")?;

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Performance settings
        let request_timeout = parse_request_timeout(
            &env::var("API_REQUEST_TIMEOUT_SECONDS").unwrap_or_else(|_| "30".to_string()),
        )
        .wrap_err("Invalid API_REQUEST_TIMEOUT_SECONDS value")?;

        let page_size: u32 = env::var("API_PAGE_SIZE")
            .unwrap_or_else(|_| "20".to_string())
            .parse()
            .wrap_err("Invalid API_PAGE_SIZE value")?;
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            eyre::bail!("API_PAGE_SIZE must be between 1 and {}", MAX_PAGE_SIZE);
        }

        // Stay boundaries
        let check_in_time = match env::var("CHECK_IN_TIME") {
            Ok(raw) => parse_time_of_day(&raw).wrap_err("Invalid CHECK_IN_TIME value")?,
            Err(_) => DEFAULT_CHECK_IN,
        };
        let check_out_time = match env::var("CHECK_OUT_TIME") {
            Ok(raw) => parse_time_of_day(&raw).wrap_err("Invalid CHECK_OUT_TIME value")?,
            Err(_) => DEFAULT_CHECK_OUT,
        };
        DateNormalizer::try_new(check_in_time, check_out_time)
            .wrap_err("Invalid CHECK_IN_TIME/CHECK_OUT_TIME combination")?;

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            page_size,
            check_in_time,
            check_out_time,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Date normalizer built from the configured check-in and check-out times
    pub fn normalizer(&self) -> DateNormalizer {
        DateNormalizer::new(self.check_in_time, self.check_out_time)
    }
}

fn parse_log_level(raw: &str) -> Result<Level> {
    match raw.trim().to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => eyre::bail!("unknown log level {:?}", other),
    }
}

fn parse_request_timeout(raw: &str) -> Result<u64> {
    let seconds: u64 = raw
        .trim()
        .parse()
        .wrap_err_with(|| format!("expected a number of seconds, got {:?}", raw))?;
    if seconds == 0 {
        eyre::bail!("request timeout must be at least one second");
    }
    Ok(seconds)
}

/// Accepts `HH:MM:SS` or `HH:MM`.
pub fn parse_time_of_day(raw: &str) -> Result<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .wrap_err_with(|| format!("expected HH:MM[:SS], got {:?}", raw))
}
