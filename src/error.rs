//! Error types shared across the logbook.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown vehicle class '{0}'")]
pub struct UnknownVehicle(pub String);

/// Errors emitted by the console input collector.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input stream closed")]
    Closed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors emitted by `SessionStore`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("session limit of {capacity} reached")]
    CapacityExceeded { capacity: usize },
}

/// Errors emitted while writing or reading the report table.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("report is missing its header")]
    MissingHeader,
    #[error("line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },
}
