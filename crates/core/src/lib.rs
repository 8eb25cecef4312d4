//! # StaySync Core
//!
//! Domain types and rules for hotel reservations: date normalization, the
//! availability calculation, write validation and the reservation service.
//! Persistence is reached only through the [`store::ReservationStore`] trait.

pub mod availability;
pub mod errors;
pub mod models;
pub mod normalize;
pub mod service;
pub mod store;
pub mod validation;
