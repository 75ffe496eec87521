//! Stream session state
//!
//! Tracks the single push connection from open to close. The session owns
//! the random client identifier, which is generated once and survives
//! close/reopen cycles: it identifies this client instance to the server
//! for as long as the process lives.

use rand::distributions::Alphanumeric;
use rand::Rng;
use tokio::task::JoinHandle;

use crate::event::kind::EventKind;

/// Length of the generated client identifier
const CLIENT_ID_LEN: usize = 32;

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No connection
    Closed,
    /// Connection established, reader task running
    Open,
}

/// State of the single push stream session
#[derive(Debug)]
pub struct StreamSession {
    /// Opaque random token identifying this client instance to the server
    client_id: String,

    /// Current phase
    phase: SessionPhase,

    /// Kinds subscribed by the current (or last) connection
    kinds: Vec<EventKind>,

    /// Reader task of the current connection
    task: Option<JoinHandle<()>>,
}

impl StreamSession {
    /// Create a new closed session with a fresh client identifier
    pub(crate) fn new() -> Self {
        Self {
            client_id: generate_client_id(),
            phase: SessionPhase::Closed,
            kinds: Vec::new(),
            task: None,
        }
    }

    /// The client identifier sent to the server on every open
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Whether a connection is currently open
    pub fn is_open(&self) -> bool {
        self.phase == SessionPhase::Open
    }

    /// Kinds subscribed by the current (or last) connection
    pub fn kinds(&self) -> &[EventKind] {
        &self.kinds
    }

    /// Record a newly established connection
    pub(crate) fn opened(&mut self, kinds: &[EventKind], task: JoinHandle<()>) {
        self.phase = SessionPhase::Open;
        self.kinds = kinds.to_vec();
        self.task = Some(task);
    }

    /// Mark the session closed (the connection is gone)
    pub(crate) fn mark_closed(&mut self) {
        self.phase = SessionPhase::Closed;
    }

    /// Take the reader task handle, if any
    pub(crate) fn take_task(&mut self) -> Option<JoinHandle<()>> {
        self.task.take()
    }
}

fn generate_client_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(CLIENT_ID_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_session_lifecycle() {
        let mut session = StreamSession::new();
        assert_eq!(session.is_open(), false);
        assert!(session.kinds().is_empty());

        let task = tokio::spawn(async {});
        session.opened(&EventKind::ALL, task);
        assert!(session.is_open());
        assert_eq!(session.kinds().len(), 7);

        session.mark_closed();
        assert!(!session.is_open());
        assert!(session.take_task().is_some());
        assert!(session.take_task().is_none());
    }

    #[test]
    fn test_client_id_stable_across_reopen() {
        let mut session = StreamSession::new();
        let id = session.client_id().to_string();

        session.mark_closed();
        assert_eq!(session.client_id(), id);
    }

    #[test]
    fn test_client_id_shape() {
        let session = StreamSession::new();
        let id = session.client_id();

        assert_eq!(id.len(), CLIENT_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));

        // Two sessions never share an identifier
        assert_ne!(StreamSession::new().client_id(), id);
    }
}
