pub mod health;
pub mod hotel;
pub mod reservation;
pub mod root;
