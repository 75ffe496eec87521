//! Server-sent events wire layer
//!
//! Incremental decoding of the `text/event-stream` format delivered by the
//! subscription endpoint. The decoder is transport-agnostic: it accepts raw
//! byte chunks in whatever sizes the connection produces and yields complete
//! events as they are framed.

pub mod decoder;
pub mod event;

pub use decoder::SseDecoder;
pub use event::SseEvent;
