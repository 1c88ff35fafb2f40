//! Common helper functions used in unit and integration tests across the project crates

pub mod backends;
pub mod kzg;
pub mod misc;
