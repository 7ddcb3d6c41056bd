//! Data layer for Bikeshare Explorer.
//!
//! Reads a city's trip CSV into typed [`TripRecord`]s, applies the month/day
//! filter and computes the descriptive statistics shown to the user.
//!
//! [`TripRecord`]: bikeshare_core::models::TripRecord

pub mod aggregator;
pub mod analysis;
pub mod filter;
pub mod reader;
pub mod table;

pub use bikeshare_core as core;
