//! Error types for cesta-core.
//!
//! Graph mutations and searches are total and never error; failures only
//! come from the boundaries that touch the filesystem (grid loading,
//! edge-list export).

use thiserror::Error;

/// Core error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Grid text was missing a required marker character.
    #[error("grid has no '{0}' marker")]
    MissingMarker(char),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
