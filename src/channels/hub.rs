//! Typed broadcast hub implementation
//!
//! One broadcast channel per event kind. Dispatch happens from the single
//! stream reader task, so subscribers observe events in wire order across
//! kinds. Consumers receive on their own tasks; that hand-off is the only
//! execution-context boundary between the transport and the UI layer.

use serde::de::DeserializeOwned;
use tokio::sync::broadcast;

use crate::event::kind::EventKind;
use crate::event::payload::{
    DeviceConfirmationView, IdentityProviderCallbackResult, NewMessagePush, NewNotificationPush,
    TransactionView,
};

/// Broadcast channels for every push event kind
///
/// Payload-less kinds (`loggedOut`, `permissionsChanged`) publish `()`;
/// the rest publish their parsed payload. A malformed body is dropped with
/// a warning and nothing is published for that event.
pub struct PushChannels {
    logged_out: broadcast::Sender<()>,
    permissions_changed: broadcast::Sender<()>,
    new_notifications: broadcast::Sender<NewNotificationPush>,
    new_messages: broadcast::Sender<NewMessagePush>,
    device_confirmations: broadcast::Sender<DeviceConfirmationView>,
    identity_callbacks: broadcast::Sender<IdentityProviderCallbackResult>,
    tickets: broadcast::Sender<TransactionView>,
}

impl PushChannels {
    /// Create the hub with the given per-channel capacity
    pub(crate) fn new(capacity: usize) -> Self {
        let (logged_out, _) = broadcast::channel(capacity);
        let (permissions_changed, _) = broadcast::channel(capacity);
        let (new_notifications, _) = broadcast::channel(capacity);
        let (new_messages, _) = broadcast::channel(capacity);
        let (device_confirmations, _) = broadcast::channel(capacity);
        let (identity_callbacks, _) = broadcast::channel(capacity);
        let (tickets, _) = broadcast::channel(capacity);

        Self {
            logged_out,
            permissions_changed,
            new_notifications,
            new_messages,
            device_confirmations,
            identity_callbacks,
            tickets,
        }
    }

    /// Subscribe to logout signals
    pub fn subscribe_logged_out(&self) -> broadcast::Receiver<()> {
        self.logged_out.subscribe()
    }

    /// Subscribe to permission-change signals
    pub fn subscribe_permissions_changed(&self) -> broadcast::Receiver<()> {
        self.permissions_changed.subscribe()
    }

    /// Subscribe to new notifications
    pub fn subscribe_new_notifications(&self) -> broadcast::Receiver<NewNotificationPush> {
        self.new_notifications.subscribe()
    }

    /// Subscribe to new messages
    pub fn subscribe_new_messages(&self) -> broadcast::Receiver<NewMessagePush> {
        self.new_messages.subscribe()
    }

    /// Subscribe to device confirmations
    pub fn subscribe_device_confirmations(&self) -> broadcast::Receiver<DeviceConfirmationView> {
        self.device_confirmations.subscribe()
    }

    /// Subscribe to identity provider callback results
    pub fn subscribe_identity_callbacks(
        &self,
    ) -> broadcast::Receiver<IdentityProviderCallbackResult> {
        self.identity_callbacks.subscribe()
    }

    /// Subscribe to ticket updates
    pub fn subscribe_tickets(&self) -> broadcast::Receiver<TransactionView> {
        self.tickets.subscribe()
    }

    /// Publish one decoded event on the channel for its kind
    ///
    /// `body` is the raw event body, `None` when the wire body was empty.
    pub(crate) fn dispatch(&self, kind: EventKind, body: Option<&str>) {
        match kind {
            // Note: send() only fails when there are no receivers, which is fine
            EventKind::LoggedOut => {
                let _ = self.logged_out.send(());
            }
            EventKind::PermissionsChanged => {
                let _ = self.permissions_changed.send(());
            }
            EventKind::NewNotification => Self::publish(&self.new_notifications, kind, body),
            EventKind::NewMessage => Self::publish(&self.new_messages, kind, body),
            EventKind::DeviceConfirmation => Self::publish(&self.device_confirmations, kind, body),
            EventKind::IdentityProviderCallback => {
                Self::publish(&self.identity_callbacks, kind, body)
            }
            EventKind::Ticket => Self::publish(&self.tickets, kind, body),
        }
    }

    /// Parse and publish a payload-carrying event; drop it on any mismatch
    fn publish<T>(tx: &broadcast::Sender<T>, kind: EventKind, body: Option<&str>)
    where
        T: DeserializeOwned + Clone,
    {
        let Some(body) = body else {
            tracing::warn!(kind = %kind, "dropping push event with missing payload");
            return;
        };

        match serde_json::from_str::<T>(body) {
            Ok(payload) => {
                let _ = tx.send(payload);
            }
            Err(err) => {
                tracing::warn!(kind = %kind, error = %err, "dropping malformed push event");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_typed_delivery() {
        let channels = PushChannels::new(16);
        let mut rx = channels.subscribe_new_notifications();

        channels.dispatch(
            EventKind::NewNotification,
            Some(r#"{"id":42,"subject":"hello"}"#),
        );

        let push = rx.recv().await.unwrap();
        assert_eq!(push.id, 42);
        assert_eq!(push.subject.as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn test_payload_less_kinds_publish_unit() {
        let channels = PushChannels::new(16);
        let mut logged_out = channels.subscribe_logged_out();
        let mut permissions = channels.subscribe_permissions_changed();

        channels.dispatch(EventKind::LoggedOut, None);
        channels.dispatch(EventKind::PermissionsChanged, None);

        logged_out.recv().await.unwrap();
        permissions.recv().await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_body_dropped() {
        let channels = PushChannels::new(16);
        let mut rx = channels.subscribe_tickets();

        // Neither the broken body nor the missing body publishes anything
        channels.dispatch(EventKind::Ticket, Some("{not json"));
        channels.dispatch(EventKind::Ticket, None);
        channels.dispatch(EventKind::Ticket, Some(r#"{"id":9,"status":"approved"}"#));

        let view = rx.recv().await.unwrap();
        assert_eq!(view.id, 9);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_publish_without_receivers_is_silent() {
        let channels = PushChannels::new(16);

        // No subscribers anywhere; must not panic or error
        channels.dispatch(EventKind::LoggedOut, None);
        channels.dispatch(EventKind::NewMessage, Some(r#"{"id":1}"#));
    }

    #[tokio::test]
    async fn test_multiple_subscribers_fan_out() {
        let channels = PushChannels::new(16);
        let mut a = channels.subscribe_new_messages();
        let mut b = channels.subscribe_new_messages();

        channels.dispatch(EventKind::NewMessage, Some(r#"{"id":3,"from":"maria"}"#));

        assert_eq!(a.recv().await.unwrap().id, 3);
        assert_eq!(b.recv().await.unwrap().id, 3);
    }
}
