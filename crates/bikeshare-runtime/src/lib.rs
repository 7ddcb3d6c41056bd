//! Session orchestration for Bikeshare Explorer.
//!
//! Ties the prompter, dataset loader, reports and raw-data browser together
//! into the interactive prompt → load → report → browse → restart loop.

pub mod session;

pub use bikeshare_core as core;
pub use bikeshare_data as data;
pub use bikeshare_ui as ui;
