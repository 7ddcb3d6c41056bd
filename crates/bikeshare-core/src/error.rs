use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by Bikeshare Explorer.
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// A dataset file could not be opened or read from disk.
    #[error("Failed to read dataset {path}: {source}")]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dataset file is not valid CSV or is missing a required column.
    #[error("Malformed dataset {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A column every dataset must carry is absent from the header row.
    #[error("Dataset {path} is missing required column \"{column}\"")]
    MissingColumn { path: PathBuf, column: String },

    /// A `Start Time` cell did not match any recognised format.
    #[error("Invalid start time on row {row}: {value}")]
    TimestampParse { row: usize, value: String },

    /// The city name is not one of the supported datasets.
    #[error("Unknown city: {0}")]
    InvalidCity(String),

    /// The month is neither `all` nor one of January..June.
    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    /// The day is neither `all` nor a weekday name.
    #[error("Invalid day: {0}")]
    InvalidDay(String),

    /// Interactive input reached end-of-file while a prompt was pending.
    #[error("Input closed")]
    InputClosed,

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the bikeshare crates.
pub type Result<T> = std::result::Result<T, BikeshareError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_dataset_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = BikeshareError::DatasetRead {
            path: PathBuf::from("/data/chicago.csv"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read dataset"));
        assert!(msg.contains("/data/chicago.csv"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_missing_column() {
        let err = BikeshareError::MissingColumn {
            path: PathBuf::from("washington.csv"),
            column: "Start Time".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Dataset washington.csv is missing required column \"Start Time\""
        );
    }

    #[test]
    fn test_error_display_timestamp_parse() {
        let err = BikeshareError::TimestampParse {
            row: 4,
            value: "yesterday".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid start time on row 4: yesterday");
    }

    #[test]
    fn test_error_display_invalid_city() {
        let err = BikeshareError::InvalidCity("boston".to_string());
        assert_eq!(err.to_string(), "Unknown city: boston");
    }

    #[test]
    fn test_error_display_invalid_month() {
        let err = BikeshareError::InvalidMonth("july".to_string());
        assert_eq!(err.to_string(), "Invalid month: july");
    }

    #[test]
    fn test_error_display_invalid_day() {
        let err = BikeshareError::InvalidDay("mon".to_string());
        assert_eq!(err.to_string(), "Invalid day: mon");
    }

    #[test]
    fn test_error_display_input_closed() {
        assert_eq!(BikeshareError::InputClosed.to_string(), "Input closed");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: BikeshareError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: BikeshareError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
