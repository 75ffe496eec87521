//! Payload models for push events
//!
//! Structured bodies carried by the payload-bearing event kinds. The server
//! sends camelCase JSON; fields the client does not consume are ignored, and
//! everything but the id is optional so partial projections still dispatch.

use serde::{Deserialize, Serialize};

/// Payload of a `newNotification` event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotificationPush {
    /// Notification id
    pub id: u64,
    /// Short subject line
    #[serde(default)]
    pub subject: Option<String>,
    /// Notification message body
    #[serde(default)]
    pub message: Option<String>,
}

/// Payload of a `newMessage` event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessagePush {
    /// Message id
    pub id: u64,
    /// Display name of the sender
    #[serde(default)]
    pub from: Option<String>,
    /// Message subject
    #[serde(default)]
    pub subject: Option<String>,
}

/// Payload of a `deviceConfirmation` event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceConfirmationView {
    /// Confirmation id
    pub id: u64,
    /// The operation being confirmed (e.g. "performPayment")
    #[serde(default)]
    pub operation_type: Option<String>,
    /// Whether the confirmation was approved (absent while pending)
    #[serde(default)]
    pub approved: Option<bool>,
}

/// Payload of an `identityProviderCallback` event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProviderCallbackResult {
    /// The request id this callback correlates to
    pub request_id: String,
    /// Callback outcome (e.g. "loginLink", "registrationDone", "error")
    #[serde(default)]
    pub status: Option<String>,
    /// Error description when the callback failed
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Payload of a `ticket` event
///
/// Tickets are pending payments awaiting approval; the event carries the
/// transaction as the server last saw it. Amounts are decimal strings, never
/// floats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
    /// Transaction id
    pub id: u64,
    /// Transaction amount as a decimal string
    #[serde(default)]
    pub amount: Option<String>,
    /// Current status (e.g. "approved", "canceled", "expired")
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_minimal_body() {
        let push: NewNotificationPush = serde_json::from_str(r#"{"id":42}"#).unwrap();
        assert_eq!(push.id, 42);
        assert!(push.subject.is_none());
        assert!(push.message.is_none());
    }

    #[test]
    fn test_notification_ignores_unknown_fields() {
        let body = r#"{"id":7,"subject":"hi","entityType":"user","read":false}"#;
        let push: NewNotificationPush = serde_json::from_str(body).unwrap();
        assert_eq!(push.id, 7);
        assert_eq!(push.subject.as_deref(), Some("hi"));
    }

    #[test]
    fn test_ticket_amount_is_string() {
        let body = r#"{"id":9,"amount":"1250.50","status":"approved"}"#;
        let view: TransactionView = serde_json::from_str(body).unwrap();
        assert_eq!(view.amount.as_deref(), Some("1250.50"));
    }

    #[test]
    fn test_identity_callback_requires_request_id() {
        let ok: IdentityProviderCallbackResult =
            serde_json::from_str(r#"{"requestId":"abc123","status":"loginLink"}"#).unwrap();
        assert_eq!(ok.request_id, "abc123");

        let missing = serde_json::from_str::<IdentityProviderCallbackResult>(r#"{"status":"x"}"#);
        assert!(missing.is_err());
    }
}
