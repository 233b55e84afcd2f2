//! The canonical decoded image representation.

/// Maximum accepted width or height for a decoded TEX image.
///
/// Corrupt or hostile headers can declare absurd dimensions; anything past
/// this bound is skipped instead of allocated.
pub const MAX_DIMENSION: u32 = 8000;

/// A decoded RGBA8 image.
///
/// Pixel data is `width * height * 4` bytes in R,G,B,A channel order,
/// top-left origin, row-major. Every decoder normalizes to this layout
/// regardless of the source channel order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from already-normalized RGBA bytes.
    ///
    /// `data.len()` must be exactly `width * height * 4`.
    pub(crate) fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * 4);
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width in pixels.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning the raw RGBA bytes.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Get one pixel as `[r, g, b, a]`. Top-left origin.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        self.data[offset..offset + 4].try_into().ok()
    }
}

/// Reorder BGRA quads to RGBA.
///
/// `src.len()` must be a multiple of 4.
pub(crate) fn bgra_to_rgba(src: &[u8]) -> Vec<u8> {
    let mut out = src.to_vec();
    for px in out.chunks_exact_mut(4) {
        px.swap(0, 2);
    }
    out
}

/// Expand BGR triples to RGBA quads with an opaque alpha of 255.
///
/// 24-bit sources carry no alpha channel; fully opaque is the policy.
/// `src.len()` must be a multiple of 3.
pub(crate) fn bgr_to_rgba(src: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.len() / 3 * 4);
    for px in src.chunks_exact(3) {
        out.extend_from_slice(&[px[2], px[1], px[0], 255]);
    }
    out
}
