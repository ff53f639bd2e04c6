//! Request handlers

pub mod health;
pub mod properties;
pub mod bookings;
