pub mod hotel;
pub mod reservation;
pub mod root;
