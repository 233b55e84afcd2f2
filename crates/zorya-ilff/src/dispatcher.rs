//! Chunk dispatch and NAME/BODY pairing.
//!
//! NAME chunks are not self-contained: each one names the next BODY chunk
//! in the stream. The pairing rule is small but easy to get wrong, so it is
//! an explicit two-state machine rather than an ambient variable: the last
//! NAME before a BODY wins, and a BODY always consumes the pending name
//! whether or not its payload decodes.

use zorya_common::memchr::memchr;

use crate::header::{ChunkRecord, ChunkTag};

/// The name carried forward from a NAME chunk to the next BODY chunk.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PendingName {
    /// No NAME chunk seen since the last BODY chunk (or the scan start).
    #[default]
    None,
    /// A decoded name waiting for its BODY chunk.
    Have(String),
}

impl PendingName {
    /// Transition on a NAME chunk: decode the NUL-padded UTF-8 payload and
    /// store it, overwriting any unconsumed previous name.
    pub fn record(&mut self, payload: &[u8]) {
        let end = memchr(0, payload).unwrap_or(payload.len());
        *self = Self::Have(String::from_utf8_lossy(&payload[..end]).into_owned());
    }

    /// Transition on a BODY chunk: give up the pending name, if any.
    pub fn take(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Self::None => None,
            Self::Have(name) => Some(name),
        }
    }
}

/// A BODY chunk paired with its name, ready for image decoding.
#[derive(Debug)]
pub(crate) struct BodyChunk<'a> {
    /// Name from the most recent NAME chunk, consumed by this BODY chunk.
    pub name: Option<String>,
    /// The raw image payload.
    pub payload: &'a [u8],
    /// Offset of the chunk within the container, for diagnostics.
    pub offset: usize,
}

/// Routes chunks by type tag, tracking the pending name across them.
#[derive(Debug, Default)]
pub(crate) struct Dispatcher {
    pending: PendingName,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch one chunk. Returns the paired body for BODY chunks; NAME
    /// chunks update internal state and all other tags are discarded whole.
    pub fn dispatch<'a>(&mut self, record: &ChunkRecord<'a>) -> Option<BodyChunk<'a>> {
        match { record.header.tag } {
            ChunkTag::NAME => {
                self.pending.record(record.payload);
                None
            }
            ChunkTag::BODY => Some(BodyChunk {
                name: self.pending.take(),
                payload: record.payload,
                offset: record.offset,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::ChunkHeader;

    fn record<'a>(tag: ChunkTag, payload: &'a [u8]) -> ChunkRecord<'a> {
        ChunkRecord {
            header: ChunkHeader {
                tag,
                payload_len: payload.len() as u32,
                reserved: 0,
                chunk_size: payload.len() as u32 + 16,
            },
            payload,
            offset: 0,
        }
    }

    #[test]
    fn test_pending_name_strips_nul_padding() {
        let mut pending = PendingName::None;
        pending.record(b"textures/hud.tex\0\0\0");
        assert_eq!(pending.take(), Some("textures/hud.tex".to_string()));
        assert_eq!(pending, PendingName::None);
    }

    #[test]
    fn test_take_without_name() {
        assert_eq!(PendingName::None.take(), None);
    }

    #[test]
    fn test_last_name_wins() {
        let mut dispatcher = Dispatcher::new();
        assert!(dispatcher
            .dispatch(&record(ChunkTag::NAME, b"first.tex\0"))
            .is_none());
        assert!(dispatcher
            .dispatch(&record(ChunkTag::NAME, b"second.tex\0"))
            .is_none());

        let body = dispatcher
            .dispatch(&record(ChunkTag::BODY, &[0u8; 4]))
            .unwrap();
        assert_eq!(body.name.as_deref(), Some("second.tex"));
    }

    #[test]
    fn test_body_consumes_name() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.dispatch(&record(ChunkTag::NAME, b"only.tex\0"));

        let first = dispatcher
            .dispatch(&record(ChunkTag::BODY, &[0u8; 4]))
            .unwrap();
        assert_eq!(first.name.as_deref(), Some("only.tex"));

        // The name was consumed; the next BODY chunk is anonymous.
        let second = dispatcher
            .dispatch(&record(ChunkTag::BODY, &[0u8; 4]))
            .unwrap();
        assert_eq!(second.name, None);
    }

    #[test]
    fn test_unknown_tags_leave_pending_name_alone() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.dispatch(&record(ChunkTag::NAME, b"kept.tga\0"));
        assert!(dispatcher
            .dispatch(&record(ChunkTag(*b"DATE"), &[0u8; 8]))
            .is_none());

        let body = dispatcher
            .dispatch(&record(ChunkTag::BODY, &[0u8; 4]))
            .unwrap();
        assert_eq!(body.name.as_deref(), Some("kept.tga"));
    }
}
