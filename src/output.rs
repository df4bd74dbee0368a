//! Output formatting and persistence for analysis results.
//!
//! Supports pretty-printing, JSON serialization, and CSV export of route
//! segments.

use csv::WriterBuilder;
use serde::Serialize;
use std::fmt::Debug;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

use crate::analyzers::types::RouteSegment;
use crate::error::{NetworkError, Result};

/// Logs a value using Rust's debug pretty-print format.
pub fn print_pretty(value: &impl Debug) {
    debug!("{:#?}", value);
}

/// Logs a value as pretty-printed JSON.
///
/// Non-finite floats (zero-flight routes) serialize as `null`.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Writes a value as pretty-printed JSON to `path`, replacing any existing file.
pub fn write_json(path: impl AsRef<Path>, value: &impl Serialize) -> Result<()> {
    let path = path.as_ref();
    let file = create(path)?;
    serde_json::to_writer_pretty(file, value)?;
    info!(path = %path.display(), "JSON written");
    Ok(())
}

/// Writes route segments as CSV with a header row, replacing any existing file.
pub fn write_segments_csv(path: impl AsRef<Path>, segments: &[RouteSegment]) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), rows = segments.len(), "Writing route segments");

    let file = create(path)?;
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(file);

    for segment in segments {
        writer.serialize(segment)?;
    }
    writer.flush().map_err(|source| NetworkError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), rows = segments.len(), "Route segments written");
    Ok(())
}

fn create(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| NetworkError::Io {
        path: path.to_path_buf(),
        source,
    })
}
