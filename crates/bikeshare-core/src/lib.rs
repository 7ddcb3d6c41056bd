//! Core types shared by every Bikeshare Explorer crate.
//!
//! Holds the error type, the city/month/day domain model, timestamp helpers,
//! text formatting and CLI settings.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;
