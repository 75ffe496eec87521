//! Push event model
//!
//! The closed set of event kinds the server can push, plus the structured
//! payloads carried by the kinds that have one. Kinds are known at compile
//! time; the server tags each pushed message with one of them.

pub mod kind;
pub mod payload;

pub use kind::EventKind;
pub use payload::{
    DeviceConfirmationView, IdentityProviderCallbackResult, NewMessagePush, NewNotificationPush,
    TransactionView,
};
