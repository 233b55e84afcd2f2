//! Common utilities for Zorya.
//!
//! This crate provides foundational types used across all Zorya crates:
//!
//! - [`BinaryReader`] - Zero-copy little-endian reading from byte slices
//! - [`Error`] / [`Result`] - The shared error type for buffer reads

mod error;
mod reader;

pub use error::{Error, Result};
pub use reader::BinaryReader;

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Re-export memchr for fast byte searching
pub use memchr;
