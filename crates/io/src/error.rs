//! Error types for rnd-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the rnd-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the output file cannot be created, written or moved
    /// into place.
    #[error("i/o error on {}: {reason}", path.display())]
    Io {
        /// Destination path of the failed write.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Wraps an error originating from the csv writer.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Wraps an error originating from JSON serialisation.
    #[error("json error: {reason}")]
    Json {
        /// Description of the underlying serialisation failure.
        reason: String,
    },

    /// Returned when a result row has no value for a requested column.
    #[error("row '{row}' has no column '{column}'")]
    UnknownColumn {
        /// Name of the row.
        row: String,
        /// Requested column.
        column: String,
    },

    /// Returned when a writer configuration is rejected.
    #[error("invalid writer configuration: {details}")]
    Validation {
        /// Human-readable summary of the problem.
        details: String,
    },
}

impl IoError {
    pub(crate) fn io(path: impl Into<PathBuf>, e: impl std::fmt::Display) -> Self {
        IoError::Io {
            path: path.into(),
            reason: e.to_string(),
        }
    }
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Json {
            reason: e.to_string(),
        }
    }
}
