//! Decoder for Innerloop's proprietary TEX format.
//!
//! A TEX payload is a fixed 32-byte header followed by raw BGRA pixels,
//! always 4 bytes per pixel. Only the two dimension fields of the header are
//! interpreted; the rest is carried for diagnostics.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use zorya_common::BinaryReader;

use crate::pixel::{bgra_to_rgba, MAX_DIMENSION};
use crate::{Error, PixelBuffer, Result};

/// TEX payload header: five 32-bit fields followed by six 16-bit fields.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct TexHeader {
    /// Format signature. Not validated; the chunk name decides the format.
    pub signature: u32,
    /// Unknown (possibly version).
    pub unk1: u32,
    /// Unknown.
    pub unk2: u32,
    /// Unknown.
    pub unk3: u32,
    /// Unknown.
    pub unk4: u32,
    /// Unknown 16-bit field preceding the dimensions.
    pub unk5: u16,
    /// Image width in pixels.
    pub width: u16,
    /// Image height in pixels.
    pub height: u16,
    /// Unknown.
    pub unk6: u16,
    /// Unknown.
    pub unk7: u16,
    /// Unknown.
    pub unk8: u16,
}

impl TexHeader {
    /// Header size in bytes.
    pub const SIZE: usize = 32;
}

/// Decode a TEX payload into an RGBA pixel buffer.
pub fn decode(payload: &[u8]) -> Result<PixelBuffer> {
    if payload.len() < TexHeader::SIZE {
        return Err(Error::TruncatedHeader {
            format: "TEX",
            needed: TexHeader::SIZE,
            available: payload.len(),
        });
    }

    let mut reader = BinaryReader::new(payload);
    let header: TexHeader = reader.read_struct()?;
    let width = header.width as u32;
    let height = header.height as u32;

    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(Error::OversizedDimensions {
            width,
            height,
            limit: MAX_DIMENSION,
        });
    }

    let pixel_data = &payload[TexHeader::SIZE..];
    let needed = width as usize * height as usize * 4;
    if pixel_data.len() < needed {
        return Err(Error::InsufficientPixelData {
            width,
            height,
            needed,
            available: pixel_data.len(),
        });
    }

    // Stored BGRA, normalized to RGBA. Rows are already top-down.
    Ok(PixelBuffer::new(
        width,
        height,
        bgra_to_rgba(&pixel_data[..needed]),
    ))
}
