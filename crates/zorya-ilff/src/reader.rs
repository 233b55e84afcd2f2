//! Sequential chunk scanner for ILFF containers.
//!
//! The scanner walks the chunk list of a validated container. It never
//! fails: corruption or truncation ends the walk with a terminal
//! [`ScanStatus`] and whatever was produced before it stands.

use std::fmt;

use zorya_common::BinaryReader;

use crate::header::{ChunkHeader, ChunkRecord, ChunkTag, IlffHeader};

/// How a container scan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    /// The declared extent of the container was walked to the end.
    Complete,
    /// The input is not an ILFF container (too short, or bad magic).
    NotAContainer,
    /// The stream ended inside a chunk header.
    TruncatedChunkHeader { offset: usize },
    /// A chunk declared more payload bytes than the stream holds.
    TruncatedPayload {
        offset: usize,
        declared: usize,
        available: usize,
    },
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete => write!(f, "complete"),
            Self::NotAContainer => write!(f, "not an ILFF container"),
            Self::TruncatedChunkHeader { offset } => {
                write!(f, "truncated chunk header at offset {offset}")
            }
            Self::TruncatedPayload {
                offset,
                declared,
                available,
            } => write!(
                f,
                "truncated payload at offset {offset}: declared {declared}, available {available}"
            ),
        }
    }
}

/// One step of a chunk scan.
#[derive(Debug)]
pub(crate) enum ScanStep<'a> {
    /// The next chunk in stream order.
    Chunk(ChunkRecord<'a>),
    /// The scan is over; no further chunks will be produced.
    Done(ScanStatus),
}

/// Walks the chunks of an ILFF container in stream order.
pub(crate) struct ChunkScanner<'a> {
    reader: BinaryReader<'a>,
    header: IlffHeader,
    /// One past the last offset at which a chunk may start. The declared
    /// file size counts from just past the magic word, hence the +4.
    end: usize,
}

impl<'a> ChunkScanner<'a> {
    /// Validate the container header and position the scanner at the first
    /// chunk. Returns `None` if the input is not an ILFF container.
    pub fn new(data: &'a [u8]) -> Option<Self> {
        let mut reader = BinaryReader::new(data);
        let header: IlffHeader = reader.read_struct().ok()?;
        let magic = header.magic;
        if magic != ChunkTag::ILFF {
            return None;
        }

        let end = header.file_size as usize + 4;
        Some(Self {
            reader,
            header,
            end,
        })
    }

    /// The validated container header.
    pub fn header(&self) -> &IlffHeader {
        &self.header
    }

    /// Advance to the next chunk.
    pub fn next_chunk(&mut self) -> ScanStep<'a> {
        if self.reader.position() >= self.end {
            return ScanStep::Done(ScanStatus::Complete);
        }

        let offset = self.reader.position();
        let Ok(header) = self.reader.read_struct::<ChunkHeader>() else {
            return ScanStep::Done(ScanStatus::TruncatedChunkHeader { offset });
        };

        let declared = header.payload_len as usize;
        let Ok(payload) = self.reader.read_bytes(declared) else {
            return ScanStep::Done(ScanStatus::TruncatedPayload {
                offset,
                declared,
                available: self.reader.remaining(),
            });
        };

        // Chunks are padded to 4-byte boundaries.
        self.reader.align_to(4);

        ScanStep::Chunk(ChunkRecord {
            header,
            payload,
            offset,
        })
    }
}
