//! ILFF header structures.

use std::fmt;

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Four-character chunk tag.
#[derive(Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(transparent)]
pub struct ChunkTag(pub [u8; 4]);

impl ChunkTag {
    /// Container magic.
    pub const ILFF: Self = Self(*b"ILFF");
    /// Name chunk: a NUL-padded UTF-8 path for the next BODY chunk.
    pub const NAME: Self = Self(*b"NAME");
    /// Body chunk: an opaque image payload.
    pub const BODY: Self = Self(*b"BODY");
}

impl fmt::Debug for ChunkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.0) {
            Ok(s) if s.bytes().all(|b| b.is_ascii_graphic() || b == b' ') => {
                write!(f, "ChunkTag({:?})", s)
            }
            _ => write!(f, "ChunkTag({:02x?})", self.0),
        }
    }
}

impl fmt::Display for ChunkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}

/// Top-level ILFF container header (20 bytes).
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct IlffHeader {
    /// Container magic, must be "ILFF".
    pub magic: ChunkTag,
    /// Declared file size. Counts from just past the magic word, so the
    /// last valid chunk offset is `file_size + 4`.
    pub file_size: u32,
    /// Reserved.
    pub reserved1: u32,
    /// Reserved.
    pub reserved2: u32,
    /// Resource type tag (e.g. "IRES" for texture resources).
    pub resource_type: ChunkTag,
}

impl IlffHeader {
    /// Header size in bytes.
    pub const SIZE: usize = 20;
}

/// Per-chunk header (16 bytes).
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct ChunkHeader {
    /// Chunk type tag.
    pub tag: ChunkTag,
    /// Payload length in bytes, excluding this header and any padding.
    pub payload_len: u32,
    /// Reserved.
    pub reserved: u32,
    /// Declared chunk size. Redundant with `payload_len` in practice;
    /// decoded for diagnostics but never cross-validated against it.
    pub chunk_size: u32,
}

impl ChunkHeader {
    /// Header size in bytes.
    pub const SIZE: usize = 16;
}

/// A chunk pulled from the container stream.
///
/// Borrows its payload from the input buffer; records live only for the
/// duration of one dispatch.
#[derive(Debug, Clone)]
pub struct ChunkRecord<'a> {
    /// The decoded chunk header.
    pub header: ChunkHeader,
    /// The raw payload bytes.
    pub payload: &'a [u8],
    /// Offset of the chunk header within the container, for diagnostics.
    pub offset: usize,
}
