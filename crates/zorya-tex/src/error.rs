//! Error types for image decoding.
//!
//! Every variant here is a per-entry skip reason: the container reader
//! records it against the entry and keeps scanning. None of these abort a
//! parse.

use thiserror::Error;

/// Errors that can occur when decoding a BODY chunk payload.
#[derive(Debug, Error)]
pub enum Error {
    /// Common library error.
    #[error("{0}")]
    Common(#[from] zorya_common::Error),

    /// Payload too short to contain the format's fixed header.
    #[error("payload too short for {format} header: {available} of {needed} bytes")]
    TruncatedHeader {
        format: &'static str,
        needed: usize,
        available: usize,
    },

    /// Declared dimensions exceed the sanity bound.
    #[error("unusually large image dimensions: {width}x{height} (limit {limit})")]
    OversizedDimensions { width: u32, height: u32, limit: u32 },

    /// Payload ends before the declared pixel data does.
    #[error("not enough pixel data for {width}x{height}: {available} of {needed} bytes")]
    InsufficientPixelData {
        width: u32,
        height: u32,
        needed: usize,
        available: usize,
    },

    /// TGA pixel depth other than 24 or 32 bpp.
    #[error("unsupported TGA pixel depth: {0} bpp")]
    UnsupportedDepth(u8),

    /// Entry name missing or carrying an unrecognized extension.
    #[error("unsupported image format: {}", name.as_deref().unwrap_or("<unnamed>"))]
    UnsupportedFormat { name: Option<String> },
}

/// Result type for decode operations.
pub type Result<T> = std::result::Result<T, Error>;
