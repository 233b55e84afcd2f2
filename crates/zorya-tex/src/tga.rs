//! Decoder for uncompressed TGA payloads.
//!
//! The resource toolchain that produced these files emits plain uncompressed
//! 24/32 bpp TGA with no color map and no extension area, so only the
//! dimension and depth fields of the 18-byte header are consulted. The
//! image-descriptor byte (offset 17) is ignored as well: rows are taken in
//! file order with no vertical flip, even for nominally bottom-up images.

use zorya_common::BinaryReader;

use crate::pixel::{bgr_to_rgba, bgra_to_rgba};
use crate::{Error, PixelBuffer, Result};

/// Size of the fixed TGA header in bytes.
pub const TGA_HEADER_SIZE: usize = 18;

/// Decode an uncompressed 24/32 bpp TGA payload into an RGBA pixel buffer.
pub fn decode(payload: &[u8]) -> Result<PixelBuffer> {
    if payload.len() < TGA_HEADER_SIZE {
        return Err(Error::TruncatedHeader {
            format: "TGA",
            needed: TGA_HEADER_SIZE,
            available: payload.len(),
        });
    }

    // Width at offset 12, height at 14, depth at 16.
    let mut reader = BinaryReader::new_at(payload, 12);
    let width = reader.read_u16()? as u32;
    let height = reader.read_u16()? as u32;
    let depth = reader.read_u8()?;

    let pixel_data = &payload[TGA_HEADER_SIZE..];
    match depth {
        32 => {
            let needed = width as usize * height as usize * 4;
            if pixel_data.len() < needed {
                return Err(Error::InsufficientPixelData {
                    width,
                    height,
                    needed,
                    available: pixel_data.len(),
                });
            }
            Ok(PixelBuffer::new(
                width,
                height,
                bgra_to_rgba(&pixel_data[..needed]),
            ))
        }
        24 => {
            let needed = width as usize * height as usize * 3;
            if pixel_data.len() < needed {
                return Err(Error::InsufficientPixelData {
                    width,
                    height,
                    needed,
                    available: pixel_data.len(),
                });
            }
            Ok(PixelBuffer::new(
                width,
                height,
                bgr_to_rgba(&pixel_data[..needed]),
            ))
        }
        other => Err(Error::UnsupportedDepth(other)),
    }
}
