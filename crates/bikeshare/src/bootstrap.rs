use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use bikeshare_core::models::City;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a CLI level name to an `EnvFilter` directive, defaulting to `warn`.
fn level_directive(log_level: &str) -> &'static str {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" | "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Logs go to `log_file` (appended, no ANSI colours) when given, otherwise to
/// stderr so they never interleave with the report on stdout.
pub fn setup_logging(log_level: &str, log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let filter = EnvFilter::new(level_directive(log_level));
    let registry = tracing_subscriber::registry().with(filter);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            registry
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()?;
        }
        None => {
            registry
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .try_init()?;
        }
    }

    Ok(())
}

// ── Data-directory discovery ───────────────────────────────────────────────────

/// Pick the directory to read datasets from.
///
/// An explicit `--data-dir` always wins; otherwise [`discover_data_dir`] is
/// consulted, falling back to the current directory.
pub fn resolve_data_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    discover_data_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Look for the city CSV files in the usual places.
///
/// Checks, in order:
/// 1. the current directory
/// 2. `~/.bikeshare/data/`
pub fn discover_data_dir() -> Option<PathBuf> {
    let mut candidates = vec![PathBuf::from(".")];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".bikeshare").join("data"));
    }
    first_with_dataset(candidates)
}

/// First candidate directory holding at least one city file.
fn first_with_dataset(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates
        .into_iter()
        .find(|dir| City::ALL.iter().any(|c| dir.join(c.file_name()).is_file()))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
