//! Event kind tags
//!
//! Each server-pushed message is tagged with one of these kinds. The set is
//! fixed: subscriptions always name kinds from this enum, and dispatch maps
//! each kind to its own typed channel.

use std::str::FromStr;

/// Kind of a server push event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The session was logged out on the server side (no payload)
    LoggedOut,
    /// The logged user's permissions changed (no payload)
    PermissionsChanged,
    /// A new notification is available
    NewNotification,
    /// A device confirmation was created or updated
    DeviceConfirmation,
    /// An identity provider callback has completed
    IdentityProviderCallback,
    /// A ticket (pending payment) was approved or canceled
    Ticket,
    /// A new message arrived
    NewMessage,
}

impl EventKind {
    /// The full set of kinds a regular session subscribes to
    pub const ALL: [EventKind; 7] = [
        EventKind::LoggedOut,
        EventKind::PermissionsChanged,
        EventKind::NewNotification,
        EventKind::DeviceConfirmation,
        EventKind::IdentityProviderCallback,
        EventKind::Ticket,
        EventKind::NewMessage,
    ];

    /// The tag used on the wire (SSE event name and `kinds` query parameter)
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::LoggedOut => "loggedOut",
            EventKind::PermissionsChanged => "permissionsChanged",
            EventKind::NewNotification => "newNotification",
            EventKind::DeviceConfirmation => "deviceConfirmation",
            EventKind::IdentityProviderCallback => "identityProviderCallback",
            EventKind::Ticket => "ticket",
            EventKind::NewMessage => "newMessage",
        }
    }

    /// Whether events of this kind carry a structured body
    pub fn has_payload(&self) -> bool {
        !matches!(self, EventKind::LoggedOut | EventKind::PermissionsChanged)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEventKind(s.to_string()))
    }
}

/// Error returned when an event tag is not part of the known set
#[derive(Debug, Clone)]
pub struct UnknownEventKind(pub String);

impl std::fmt::Display for UnknownEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown event kind: {}", self.0)
    }
}

impl std::error::Error for UnknownEventKind {}
