//! Image format dispatch.
//!
//! A BODY chunk's encoding is determined solely by the file extension of the
//! name that preceded it in the chunk stream. Content is never sniffed.

/// The closed set of payload encodings found in ILFF resource files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Innerloop's proprietary raw-pixel format (`.tex`).
    Tex,
    /// Uncompressed Truevision TGA, 24 or 32 bpp (`.tga`).
    Tga,
    /// No name, or an extension no decoder handles.
    Unsupported,
}

impl ImageFormat {
    /// Classify an entry by the lower-cased extension of its name.
    pub fn from_name(name: Option<&str>) -> Self {
        let Some(ext) = name.and_then(extension) else {
            return Self::Unsupported;
        };
        match ext.to_ascii_lowercase().as_str() {
            "tex" => Self::Tex,
            "tga" => Self::Tga,
            _ => Self::Unsupported,
        }
    }
}

/// The part of `name` after the final `.`, if any.
fn extension(name: &str) -> Option<&str> {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
        _ => None,
    }
}
