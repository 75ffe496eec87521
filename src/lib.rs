//! Server push event stream client with typed per-kind channels
//!
//! Two independent facilities:
//!
//! - [`PushClient`] opens the single long-lived push connection to the
//!   service, subscribes to the fixed set of event kinds, and republishes
//!   every received event on the broadcast channel for its kind.
//! - [`menu`] models the statically defined navigation tree and resolves
//!   which entry is "current" via [`menu::ActiveMenu`] selectors.
//!
//! # Architecture
//!
//! ```text
//!   server ──(SSE)──► PushClient reader task
//!                          │  SseDecoder
//!                          ▼
//!                     PushChannels ──► Receiver<NewNotificationPush>
//!                      (per kind)  ──► Receiver<TransactionView>
//!                                  ──► Receiver<()>  (loggedOut, ...)
//! ```
//!
//! Events are dispatched in wire order from one task; subscribers consume
//! them on their own executors. Receiving a `loggedOut` event closes the
//! connection before the logout signal is delivered, so nothing follows a
//! logout on any channel.
//!
//! # Example
//! ```no_run
//! use push_stream::{ClientConfig, PushClient};
//!
//! # async fn example() -> push_stream::Result<()> {
//! let client = PushClient::new(ClientConfig::new("https://demo.example.org/api"));
//! let mut tickets = client.channels().subscribe_tickets();
//!
//! client.open().await?;
//! while let Ok(ticket) = tickets.recv().await {
//!     println!("ticket {} is now {:?}", ticket.id, ticket.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod channels;
pub mod client;
pub mod error;
pub mod event;
pub mod menu;
pub mod sse;

pub use channels::PushChannels;
pub use client::{ClientConfig, PushClient};
pub use error::{Error, Result};
pub use event::EventKind;
