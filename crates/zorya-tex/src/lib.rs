//! Image decoding for IGI game resources.
//!
//! ILFF resource containers carry their images in one of two encodings,
//! chosen by the file extension of the entry's name:
//!
//! - `.tex` - Innerloop's proprietary raw format: a 32-byte header followed
//!   by BGRA pixels, 4 bytes per pixel
//! - `.tga` - uncompressed Truevision TGA, 24 or 32 bpp
//!
//! Both decode to the same canonical [`PixelBuffer`]: RGBA8, top-left
//! origin, row-major. Decode failures are per-entry skip reasons, never
//! fatal to the surrounding container scan.
//!
//! # Example
//!
//! ```
//! use zorya_tex::{decode, ImageFormat};
//!
//! assert_eq!(ImageFormat::from_name(Some("hud.tex")), ImageFormat::Tex);
//!
//! // An unnamed payload has no format and is skipped.
//! assert!(decode(None, &[0u8; 64]).is_err());
//! ```

mod error;
mod format;
mod pixel;
pub mod tex;
pub mod tga;

pub use error::{Error, Result};
pub use format::ImageFormat;
pub use pixel::{PixelBuffer, MAX_DIMENSION};

/// Decode a BODY chunk payload into an RGBA pixel buffer.
///
/// The format is taken from `name`'s extension alone; payload content is
/// never sniffed.
pub fn decode(name: Option<&str>, payload: &[u8]) -> Result<PixelBuffer> {
    match ImageFormat::from_name(name) {
        ImageFormat::Tex => tex::decode(payload),
        ImageFormat::Tga => tga::decode(payload),
        ImageFormat::Unsupported => Err(Error::UnsupportedFormat {
            name: name.map(str::to_owned),
        }),
    }
}
