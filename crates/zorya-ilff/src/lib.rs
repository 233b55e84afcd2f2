//! ILFF resource container reader for IGI game files.
//!
//! ILFF ("InnerLoop File Format") is the chunk-based container Innerloop's
//! engine uses for game resources. A `.res` texture file is a 20-byte
//! container header followed by a list of 16-byte-headed chunks, each padded
//! to a 4-byte boundary:
//!
//! - `NAME` - a NUL-padded UTF-8 path naming the next `BODY` chunk
//! - `BODY` - an image payload, TEX or TGA encoded per the name's extension
//! - anything else is skipped whole
//!
//! Parsing is deliberately forgiving: arbitrary, truncated, or hostile
//! input always yields a [`Catalog`] - possibly empty or partial - with the
//! trouble recorded on [`Catalog::status`] and [`Catalog::skipped`] instead
//! of raised as errors.
//!
//! # Example
//!
//! ```no_run
//! use zorya_ilff::Catalog;
//!
//! let catalog = Catalog::open("textures.res")?;
//! for (i, entry) in catalog.iter().enumerate() {
//!     let image = entry.image();
//!     println!(
//!         "{}: {}x{} px, {:.2} KB",
//!         entry.display_name(i),
//!         image.width(),
//!         image.height(),
//!         entry.payload_size() as f64 / 1024.0,
//!     );
//! }
//! # Ok::<(), zorya_ilff::Error>(())
//! ```

mod catalog;
mod dispatcher;
mod error;
mod header;
mod reader;

pub use catalog::{Catalog, ImageEntry, SkippedEntry};
pub use dispatcher::PendingName;
pub use error::{Error, Result};
pub use header::{ChunkHeader, ChunkRecord, ChunkTag, IlffHeader};
pub use reader::ScanStatus;
