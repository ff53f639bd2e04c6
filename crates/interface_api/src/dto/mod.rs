//! Request/Response data transfer objects

pub mod property;
pub mod booking;
