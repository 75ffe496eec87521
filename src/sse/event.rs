//! Decoded wire events

/// A single decoded server-sent event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// Event name from the `event:` field ("message" when the server omits it)
    pub name: String,
    /// Raw body accumulated from `data:` lines, joined with `\n`
    pub data: String,
    /// Last seen `id:` field, if any
    pub id: Option<String>,
    /// Reconnection hint from the `retry:` field, in milliseconds
    pub retry: Option<u64>,
}

impl SseEvent {
    /// The event body, treating an empty body as "no payload"
    pub fn body(&self) -> Option<&str> {
        if self.data.is_empty() {
            None
        } else {
            Some(&self.data)
        }
    }
}

impl Default for SseEvent {
    fn default() -> Self {
        Self {
            name: "message".to_string(),
            data: String::new(),
            id: None,
            retry: None,
        }
    }
}
