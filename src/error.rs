use std::path::PathBuf;

/// Errors raised while loading route records or preparing an analysis.
#[derive(thiserror::Error, Debug)]
pub enum NetworkError {
    #[error("Error reading from '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse route record: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },
    #[error("Row {row} is missing a value for '{column}'")]
    MissingAirportCode { row: usize, column: &'static str },
    #[error("Percentile {0} must be in range [0, 100]")]
    InvalidPercentile(f64),
    #[error("Invalid configuration in '{path}': {message}")]
    Config { path: PathBuf, message: String },
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
