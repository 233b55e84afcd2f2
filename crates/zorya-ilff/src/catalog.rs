//! The resource catalog: every image an ILFF container yields.

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;
use zorya_tex::PixelBuffer;

use crate::dispatcher::{BodyChunk, Dispatcher};
use crate::header::ChunkTag;
use crate::reader::{ChunkScanner, ScanStatus, ScanStep};
use crate::Result;

/// One successfully decoded image from a BODY chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    name: Option<String>,
    image: PixelBuffer,
    payload_size: usize,
}

impl ImageEntry {
    /// The name carried by the preceding NAME chunk, if there was one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The final path component of the name, if there was one.
    pub fn file_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(|n| n.rsplit(['/', '\\']).next().unwrap_or(n))
    }

    /// A displayable name: the file name, or `"Image {n}"` for anonymous
    /// entries, where `index` is the entry's position in the catalog.
    pub fn display_name(&self, index: usize) -> String {
        match self.file_name() {
            Some(name) => name.to_string(),
            None => format!("Image {}", index + 1),
        }
    }

    /// The decoded RGBA pixels.
    pub fn image(&self) -> &PixelBuffer {
        &self.image
    }

    /// Size of the encoded BODY payload in bytes (for display).
    pub fn payload_size(&self) -> usize {
        self.payload_size
    }
}

/// A BODY chunk that did not decode.
///
/// Skips are ordinary outcomes, kept for diagnostics rather than raised as
/// errors; the scan continues past them.
#[derive(Debug)]
pub struct SkippedEntry {
    /// Offset of the chunk within the container.
    pub offset: usize,
    /// Name the entry would have had.
    pub name: Option<String>,
    /// Why the payload was not decoded.
    pub reason: zorya_tex::Error,
}

/// An ordered catalog of the images decoded from one ILFF container.
///
/// A catalog is a pure function of the input bytes: parsing never fails and
/// never panics, it just produces fewer entries the worse the input is. The
/// terminal [`ScanStatus`] and the skipped-entry list say what was wrong.
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<ImageEntry>,
    skipped: Vec<SkippedEntry>,
    status: ScanStatus,
    resource_type: Option<ChunkTag>,
}

impl Catalog {
    /// Read an ILFF container from a file.
    ///
    /// The file is memory-mapped for the duration of the parse and released
    /// before returning. I/O is the only fatal error; malformed content
    /// degrades to a partial or empty catalog like [`Catalog::from_bytes`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(Self::from_bytes(&mmap))
    }

    /// Parse an ILFF container from bytes. Never fails.
    pub fn from_bytes(data: &[u8]) -> Self {
        let Some(mut scanner) = ChunkScanner::new(data) else {
            return Self::empty(ScanStatus::NotAContainer);
        };
        let resource_type = Some(scanner.header().resource_type);

        let mut dispatcher = Dispatcher::new();
        let mut catalog = Self {
            entries: Vec::new(),
            skipped: Vec::new(),
            status: ScanStatus::Complete,
            resource_type,
        };

        loop {
            match scanner.next_chunk() {
                ScanStep::Chunk(record) => {
                    if let Some(body) = dispatcher.dispatch(&record) {
                        catalog.push_decoded(body);
                    }
                }
                ScanStep::Done(status) => {
                    catalog.status = status;
                    break;
                }
            }
        }

        catalog
    }

    /// Parse an ILFF container, decoding BODY payloads on the rayon pool.
    ///
    /// Catalog order still matches chunk-stream order; only the decode work
    /// itself runs out of order. Equivalent to [`Catalog::from_bytes`] for
    /// every input.
    #[cfg(feature = "parallel")]
    pub fn from_bytes_parallel(data: &[u8]) -> Self {
        use rayon::prelude::*;

        let Some(mut scanner) = ChunkScanner::new(data) else {
            return Self::empty(ScanStatus::NotAContainer);
        };
        let resource_type = Some(scanner.header().resource_type);

        let mut dispatcher = Dispatcher::new();
        let mut bodies = Vec::new();
        let status = loop {
            match scanner.next_chunk() {
                ScanStep::Chunk(record) => {
                    if let Some(body) = dispatcher.dispatch(&record) {
                        bodies.push(body);
                    }
                }
                ScanStep::Done(status) => break status,
            }
        };

        let outcomes: Vec<_> = bodies
            .into_par_iter()
            .map(|body| {
                let result = zorya_tex::decode(body.name.as_deref(), body.payload);
                (body.name, body.offset, body.payload.len(), result)
            })
            .collect();

        let mut catalog = Self {
            entries: Vec::new(),
            skipped: Vec::new(),
            status,
            resource_type,
        };
        for (name, offset, payload_size, result) in outcomes {
            match result {
                Ok(image) => catalog.entries.push(ImageEntry {
                    name,
                    image,
                    payload_size,
                }),
                Err(reason) => catalog.skipped.push(SkippedEntry {
                    offset,
                    name,
                    reason,
                }),
            }
        }
        catalog
    }

    fn empty(status: ScanStatus) -> Self {
        Self {
            entries: Vec::new(),
            skipped: Vec::new(),
            status,
            resource_type: None,
        }
    }

    fn push_decoded(&mut self, body: BodyChunk<'_>) {
        match zorya_tex::decode(body.name.as_deref(), body.payload) {
            Ok(image) => self.entries.push(ImageEntry {
                name: body.name,
                image,
                payload_size: body.payload.len(),
            }),
            Err(reason) => self.skipped.push(SkippedEntry {
                offset: body.offset,
                name: body.name,
                reason,
            }),
        }
    }

    /// The decoded entries, in chunk-stream order.
    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    /// Get an entry by index.
    pub fn get(&self, index: usize) -> Option<&ImageEntry> {
        self.entries.get(index)
    }

    /// Number of decoded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry decoded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the decoded entries.
    pub fn iter(&self) -> impl Iterator<Item = &ImageEntry> {
        self.entries.iter()
    }

    /// BODY chunks that were present but did not decode.
    pub fn skipped(&self) -> &[SkippedEntry] {
        &self.skipped
    }

    /// How the scan ended.
    pub fn status(&self) -> ScanStatus {
        self.status
    }

    /// The container's resource type tag, when the header was valid.
    pub fn resource_type(&self) -> Option<ChunkTag> {
        self.resource_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::IlffHeader;
    use zorya_tex::Error as DecodeError;

    /// Build an ILFF container from (tag, payload) pairs.
    fn container(chunks: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
        let mut body = Vec::new();
        for (tag, payload) in chunks {
            body.extend_from_slice(*tag);
            body.extend_from_slice(&(payload.len() as u32).to_le_bytes());
            body.extend_from_slice(&0u32.to_le_bytes());
            body.extend_from_slice(&(payload.len() as u32 + 16).to_le_bytes());
            body.extend_from_slice(payload);
            while body.len() % 4 != 0 {
                body.push(0);
            }
        }

        let total = IlffHeader::SIZE + body.len();
        let mut data = Vec::with_capacity(total);
        data.extend_from_slice(b"ILFF");
        data.extend_from_slice(&((total - 4) as u32).to_le_bytes());
        data.extend_from_slice(&[0u8; 8]);
        data.extend_from_slice(b"IRES");
        data.extend_from_slice(&body);
        data
    }

    /// A minimal decodable TEX payload.
    fn tex_payload(width: u16, height: u16) -> Vec<u8> {
        let mut buf = vec![0u8; 20]; // five u32 fields
        buf.extend_from_slice(&0u16.to_le_bytes());
        buf.extend_from_slice(&width.to_le_bytes());
        buf.extend_from_slice(&height.to_le_bytes());
        buf.extend_from_slice(&[0u8; 6]); // three trailing u16 fields
        buf.extend(std::iter::repeat(0x7F).take(width as usize * height as usize * 4));
        buf
    }

    fn name_payload(name: &str) -> Vec<u8> {
        let mut buf = name.as_bytes().to_vec();
        buf.push(0);
        buf
    }

    #[test]
    fn test_not_a_container() {
        let catalog = Catalog::from_bytes(b"RIFF\x10\0\0\0 not ilff at all");
        assert!(catalog.is_empty());
        assert_eq!(catalog.status(), ScanStatus::NotAContainer);
        assert_eq!(catalog.resource_type(), None);
    }

    #[test]
    fn test_decodes_named_entries_in_order() {
        let data = container(&[
            (b"NAME", name_payload("a.tex")),
            (b"BODY", tex_payload(2, 2)),
            (b"NAME", name_payload("b.tex")),
            (b"BODY", tex_payload(1, 1)),
        ]);

        let catalog = Catalog::from_bytes(&data);
        assert_eq!(catalog.status(), ScanStatus::Complete);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().name(), Some("a.tex"));
        assert_eq!(catalog.get(0).unwrap().image().width(), 2);
        assert_eq!(catalog.get(1).unwrap().name(), Some("b.tex"));
        assert_eq!(catalog.get(1).unwrap().image().width(), 1);
        assert_eq!(
            catalog.resource_type().unwrap(),
            crate::header::ChunkTag(*b"IRES")
        );
    }

    #[test]
    fn test_last_name_before_body_wins() {
        let data = container(&[
            (b"NAME", name_payload("stale.tex")),
            (b"NAME", name_payload("fresh.tex")),
            (b"BODY", tex_payload(1, 1)),
        ]);

        let catalog = Catalog::from_bytes(&data);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().name(), Some("fresh.tex"));
    }

    #[test]
    fn test_anonymous_body_is_skipped_as_unsupported() {
        let data = container(&[(b"BODY", tex_payload(1, 1))]);

        let catalog = Catalog::from_bytes(&data);
        assert!(catalog.is_empty());
        assert_eq!(catalog.skipped().len(), 1);
        let skip = &catalog.skipped()[0];
        assert_eq!(skip.name, None);
        assert!(matches!(
            skip.reason,
            DecodeError::UnsupportedFormat { name: None }
        ));
    }

    #[test]
    fn test_failed_decode_consumes_name_and_scan_continues() {
        let data = container(&[
            (b"NAME", name_payload("huge.tex")),
            (b"BODY", tex_payload(8001, 1)),
            (b"NAME", name_payload("ok.tex")),
            (b"BODY", tex_payload(1, 1)),
        ]);

        let catalog = Catalog::from_bytes(&data);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().name(), Some("ok.tex"));
        assert_eq!(catalog.skipped().len(), 1);
        assert_eq!(catalog.skipped()[0].name.as_deref(), Some("huge.tex"));
        assert!(matches!(
            catalog.skipped()[0].reason,
            DecodeError::OversizedDimensions { width: 8001, .. }
        ));
    }

    #[test]
    fn test_unknown_chunks_are_ignored() {
        let data = container(&[
            (b"DATE", b"2000-12-08\0\0".to_vec()),
            (b"NAME", name_payload("a.tex")),
            (b"CMAP", vec![0u8; 12]),
            (b"BODY", tex_payload(1, 1)),
        ]);

        let catalog = Catalog::from_bytes(&data);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().name(), Some("a.tex"));
        assert!(catalog.skipped().is_empty());
    }

    #[test]
    fn test_truncation_keeps_earlier_entries() {
        let intact = container(&[
            (b"NAME", name_payload("a.tex")),
            (b"BODY", tex_payload(1, 1)),
            (b"NAME", name_payload("b.tex")),
            (b"BODY", tex_payload(2, 2)),
        ]);

        // Cut into the final BODY payload without shrinking the declared
        // file size: the scan must stop there and keep the first entry.
        let mut truncated = intact.clone();
        truncated.truncate(intact.len() - 8);

        let catalog = Catalog::from_bytes(&truncated);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().name(), Some("a.tex"));
        assert!(matches!(
            catalog.status(),
            ScanStatus::TruncatedPayload { .. }
        ));
    }

    #[test]
    fn test_reparse_is_deterministic() {
        let data = container(&[
            (b"NAME", name_payload("a.tex")),
            (b"BODY", tex_payload(2, 2)),
            (b"BODY", tex_payload(1, 1)),
        ]);

        let first = Catalog::from_bytes(&data);
        let second = Catalog::from_bytes(&data);

        assert_eq!(first.entries(), second.entries());
        assert_eq!(first.status(), second.status());
        assert_eq!(first.skipped().len(), second.skipped().len());
    }

    #[test]
    fn test_payload_size_reported() {
        let payload = tex_payload(2, 2);
        let expected = payload.len();
        let data = container(&[(b"NAME", name_payload("a.tex")), (b"BODY", payload)]);

        let catalog = Catalog::from_bytes(&data);
        assert_eq!(catalog.get(0).unwrap().payload_size(), expected);
    }

    #[test]
    fn test_display_name_placeholder() {
        let entry = ImageEntry {
            name: None,
            image: Catalog::from_bytes(&container(&[
                (b"NAME", name_payload("a.tex")),
                (b"BODY", tex_payload(1, 1)),
            ]))
            .get(0)
            .unwrap()
            .image()
            .clone(),
            payload_size: 0,
        };
        assert_eq!(entry.display_name(0), "Image 1");

        let named = ImageEntry {
            name: Some("textures\\ui\\hud.tex".to_string()),
            ..entry
        };
        assert_eq!(named.display_name(3), "hud.tex");
        assert_eq!(named.file_name(), Some("hud.tex"));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let data = container(&[
            (b"NAME", name_payload("a.tex")),
            (b"BODY", tex_payload(2, 2)),
            (b"NAME", name_payload("bad.tex")),
            (b"BODY", tex_payload(4, 4)[..40].to_vec()),
            (b"NAME", name_payload("b.tga")),
            (b"BODY", {
                let mut tga = vec![0u8; 18];
                tga[12] = 1;
                tga[14] = 1;
                tga[16] = 32;
                tga.extend_from_slice(&[9, 8, 7, 6]);
                tga
            }),
        ]);

        let sequential = Catalog::from_bytes(&data);
        let parallel = Catalog::from_bytes_parallel(&data);

        assert_eq!(sequential.entries(), parallel.entries());
        assert_eq!(sequential.status(), parallel.status());
        assert_eq!(sequential.skipped().len(), parallel.skipped().len());
    }
}
