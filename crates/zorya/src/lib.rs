//! Zorya - IGI game resource extraction and analysis library.
//!
//! This crate provides a unified interface to the Zorya library ecosystem
//! for working with Innerloop's ILFF game resource files.
//!
//! # Crates
//!
//! - [`zorya_common`] - Common utilities (binary reading)
//! - [`zorya_ilff`] - ILFF `.res` container reading
//! - [`zorya_tex`] - TEX and TGA image decoding
//!
//! # Example
//!
//! ```no_run
//! use zorya::prelude::*;
//!
//! let catalog = Catalog::open("textures.res")?;
//! println!("{} images, {} skipped", catalog.len(), catalog.skipped().len());
//!
//! if let Some(entry) = catalog.get(0) {
//!     let image = entry.image();
//!     println!("first image: {}x{}", image.width(), image.height());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use zorya_common as common;
pub use zorya_ilff as ilff;
pub use zorya_tex as tex;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use zorya_common::BinaryReader;
    pub use zorya_ilff::{Catalog, ChunkTag, ImageEntry, ScanStatus, SkippedEntry};
    pub use zorya_tex::{ImageFormat, PixelBuffer};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
