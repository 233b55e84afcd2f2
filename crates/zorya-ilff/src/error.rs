//! Error types for ILFF container handling.
//!
//! Malformed container bytes never surface here: the scanner degrades to a
//! partial [`Catalog`](crate::Catalog) instead. Only opening a file can
//! actually fail.

use thiserror::Error;

/// Errors that can occur when working with ILFF resource files.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ILFF operations.
pub type Result<T> = std::result::Result<T, Error>;
