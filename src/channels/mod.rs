//! Per-kind broadcast channels
//!
//! The hub routes decoded push events to subscribers. It uses
//! `tokio::sync::broadcast` for fan-out to any number of consumers.
//!
//! # Architecture
//!
//! ```text
//!                         PushChannels
//!                ┌────────────────────────────┐
//!   reader task  │ loggedOut        ── tx ────┼──► Receiver<()>
//!   dispatch() ──┼ newNotification  ── tx ────┼──► Receiver<NewNotificationPush>
//!                │ ticket           ── tx ────┼──► Receiver<TransactionView>
//!                │ ...one sender per kind...  │
//!                └────────────────────────────┘
//! ```
//!
//! The mapping from kind to channel is static and typed: every kind has its
//! own sender, built once when the client is created. Opening and closing
//! the stream never re-registers anything.

pub mod hub;

pub use hub::PushChannels;
