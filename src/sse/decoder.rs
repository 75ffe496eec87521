//! Incremental SSE decoder
//!
//! Buffers transport chunks and yields events as blank-line frames complete.
//! Chunk boundaries can fall anywhere, including inside a field name; the
//! decoder keeps unfinished lines buffered until the terminating newline
//! arrives. `Bytes` chunks from the connection are appended without copying
//! the already-consumed prefix.

use bytes::BytesMut;

use super::event::SseEvent;

/// Incremental decoder for the `text/event-stream` format
#[derive(Debug, Default)]
pub struct SseDecoder {
    buf: BytesMut,
    pending: Pending,
}

/// Fields of the event currently being assembled
#[derive(Debug, Default)]
struct Pending {
    name: Option<String>,
    data: Option<String>,
    id: Option<String>,
    retry: Option<u64>,
}

impl Pending {
    /// Whether any field line has been seen since the last dispatch
    fn dirty(&self) -> bool {
        self.name.is_some() || self.data.is_some() || self.id.is_some() || self.retry.is_some()
    }

    fn take(&mut self) -> SseEvent {
        let pending = std::mem::take(self);
        SseEvent {
            name: pending.name.unwrap_or_else(|| "message".to_string()),
            data: pending.data.unwrap_or_default(),
            id: pending.id,
            retry: pending.retry,
        }
    }
}

impl SseDecoder {
    /// Create a new decoder with an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a transport chunk, returning every event completed by it
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<SseEvent> {
        self.buf.extend_from_slice(chunk);

        let mut events = Vec::new();
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let line = self.buf.split_to(pos + 1);
            let mut line = &line[..line.len() - 1];
            if line.last() == Some(&b'\r') {
                line = &line[..line.len() - 1];
            }

            if let Some(event) = self.process_line(&String::from_utf8_lossy(line)) {
                events.push(event);
            }
        }
        events
    }

    /// Handle one complete line; returns an event on a terminating blank line
    fn process_line(&mut self, line: &str) -> Option<SseEvent> {
        if line.is_empty() {
            if self.pending.dirty() {
                return Some(self.pending.take());
            }
            return None;
        }

        // Lines starting with a colon are comments (often keep-alives)
        if line.starts_with(':') {
            return None;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };

        match field {
            "event" => self.pending.name = Some(value.to_string()),
            "data" => match &mut self.pending.data {
                Some(data) => {
                    data.push('\n');
                    data.push_str(value);
                }
                None => self.pending.data = Some(value.to_string()),
            },
            "id" => self.pending.id = Some(value.to_string()),
            "retry" => {
                if let Ok(ms) = value.parse::<u64>() {
                    self.pending.retry = Some(ms);
                }
            }
            other => {
                tracing::trace!(field = other, "ignoring unknown SSE field");
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_event() {
        let mut decoder = SseDecoder::new();
        let events = decoder.feed(b"event: newNotification\ndata: {\"id\":42}\n\n");

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "newNotification");
        assert_eq!(events[0].body(), Some("{\"id\":42}"));
    }

    #[test]
    fn test_event_split_across_chunks() {
        let mut decoder = SseDecoder::new();

        assert!(decoder.feed(b"event: tick").is_empty());
        assert!(decoder.feed(b"et\ndata: {\"id\":1}").is_empty());
        let events = decoder.feed(b"\n\n");

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "ticket");
        assert_eq!(events[0].body(), Some("{\"id\":1}"));
    }

    #[test]
    fn test_multiple_events_in_one_chunk() {
        let mut decoder = SseDecoder::new();
        let events = decoder.feed(b"event: a\ndata: 1\n\nevent: b\ndata: 2\n\n");

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name, "a");
        assert_eq!(events[1].name, "b");
    }

    #[test]
    fn test_crlf_line_endings() {
        let mut decoder = SseDecoder::new();
        let events = decoder.feed(b"event: loggedOut\r\ndata:\r\n\r\n");

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "loggedOut");
        assert_eq!(events[0].body(), None);
    }

    #[test]
    fn test_multi_line_data_joined_with_newline() {
        let mut decoder = SseDecoder::new();
        let events = decoder.feed(b"data: first\ndata: second\n\n");

        assert_eq!(events[0].body(), Some("first\nsecond"));
    }

    #[test]
    fn test_comments_and_blank_lines_ignored() {
        let mut decoder = SseDecoder::new();

        assert!(decoder.feed(b": keep-alive\n\n").is_empty());
        let events = decoder.feed(b": ping\nevent: x\ndata: y\n\n");

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "x");
    }

    #[test]
    fn test_event_without_data_still_dispatches() {
        let mut decoder = SseDecoder::new();
        let events = decoder.feed(b"event: permissionsChanged\n\n");

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].body(), None);
    }

    #[test]
    fn test_default_event_name() {
        let mut decoder = SseDecoder::new();
        let events = decoder.feed(b"data: hello\n\n");

        assert_eq!(events[0].name, "message");
    }

    #[test]
    fn test_id_and_retry_fields() {
        let mut decoder = SseDecoder::new();
        let events = decoder.feed(b"id: 7\nretry: 3000\ndata: x\n\n");

        assert_eq!(events[0].id.as_deref(), Some("7"));
        assert_eq!(events[0].retry, Some(3000));
    }
}
