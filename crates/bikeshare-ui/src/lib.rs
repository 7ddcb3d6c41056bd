//! Terminal layer for Bikeshare Explorer.
//!
//! Provides the interactive prompter that collects filters, the plain-text
//! report renderers, and the paginated raw-data browser.

pub mod prompt;
pub mod raw_view;
pub mod report;

pub use bikeshare_core as core;
