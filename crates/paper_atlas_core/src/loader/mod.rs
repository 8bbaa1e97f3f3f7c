//! Local data-file loading.
//!
//! # Responsibility
//! - Read JSON arrays of records from the site data directory.
//! - Keep the "never raise past this boundary" contract for page data.
//!
//! # Invariants
//! - [`load_array`] never fails; any read/parse failure yields an empty vec.
//! - A single malformed record is skipped without discarding its siblings.
//! - Log events carry paths and counts only, never record contents.

use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

mod dataset;

pub use dataset::{DataSet, SiteSummary};

/// Result type for strict loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// File-level loading failure.
#[derive(Debug)]
pub enum LoadError {
    /// File could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File content is not valid JSON.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// File is valid JSON but the top-level value is not an array.
    NotAnArray { path: PathBuf },
}

impl LoadError {
    /// Stable machine-readable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "read_failed",
            Self::Json { .. } => "parse_failed",
            Self::NotAnArray { .. } => "not_an_array",
        }
    }
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "failed to parse `{}`: {source}", path.display())
            }
            Self::NotAnArray { path } => {
                write!(f, "expected a JSON array in `{}`", path.display())
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::NotAnArray { .. } => None,
        }
    }
}

/// Loads a JSON array of records, reporting file-level failures.
///
/// Records that fail to deserialize individually are skipped and logged;
/// only whole-file problems surface as [`LoadError`].
pub fn try_load_array<T: DeserializeOwned>(path: impl AsRef<Path>) -> LoadResult<Vec<T>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let Value::Array(items) = value else {
        return Err(LoadError::NotAnArray {
            path: path.to_path_buf(),
        });
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<T>(item) {
            Ok(record) => records.push(record),
            Err(err) => warn!("{}", record_skipped_event(path, index, &err)),
        }
    }
    Ok(records)
}

/// Log line for a record that failed to deserialize.
///
/// Carries the serde error category only; the error text quotes record
/// values and stays out of the log.
fn record_skipped_event(path: &Path, index: usize, err: &serde_json::Error) -> String {
    let category = match err.classify() {
        Category::Io => "io",
        Category::Syntax => "syntax",
        Category::Data => "data",
        Category::Eof => "eof",
    };
    format!(
        "event=record_skipped module=loader status=warn path={} index={} error_code=record_invalid category={}",
        path.display(),
        index,
        category
    )
}

/// Loads a JSON array of records, degrading to an empty vec on failure.
///
/// # Side effects
/// - Emits `data_load` events with duration, status and record count.
pub fn load_array<T: DeserializeOwned>(path: impl AsRef<Path>) -> Vec<T> {
    let path = path.as_ref();
    let started_at = Instant::now();
    debug!(
        "event=data_load module=loader status=start path={}",
        path.display()
    );

    match try_load_array(path) {
        Ok(records) => {
            info!(
                "event=data_load module=loader status=ok path={} count={} duration_ms={}",
                path.display(),
                records.len(),
                started_at.elapsed().as_millis()
            );
            records
        }
        Err(err) => {
            warn!(
                "event=data_load module=loader status=degraded path={} duration_ms={} error_code={} error={}",
                path.display(),
                started_at.elapsed().as_millis(),
                err.code(),
                err
            );
            Vec::new()
        }
    }
}
