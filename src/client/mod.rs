//! Push stream client
//!
//! Opens the single long-lived push connection to the service, decodes the
//! server-sent events it delivers, and republishes each event on the typed
//! channel for its kind.
//!
//! At most one connection exists per client instance. `open()` while open is
//! a no-op, as is `close()` while closed. Receiving a `loggedOut` event
//! tears the connection down before the logout signal is delivered, so no
//! event can follow a logout on any channel.

pub mod config;
pub mod session;

use std::sync::Arc;

use futures::StreamExt;
use reqwest::header;
use tokio::sync::Mutex;

use crate::channels::PushChannels;
use crate::error::{Error, Result};
use crate::event::kind::EventKind;
use crate::sse::SseDecoder;

pub use config::ClientConfig;
pub use session::{SessionPhase, StreamSession};

/// Path of the subscription endpoint under the service root
const SUBSCRIBE_PATH: [&str; 2] = ["push", "subscribe"];

/// Client for the server push event stream
///
/// # Example
/// ```no_run
/// use push_stream::{ClientConfig, PushClient};
///
/// # async fn example() -> push_stream::Result<()> {
/// let config = ClientConfig::new("https://demo.example.org/api");
/// let client = PushClient::new(config);
///
/// let mut notifications = client.channels().subscribe_new_notifications();
/// tokio::spawn(async move {
///     while let Ok(push) = notifications.recv().await {
///         println!("notification #{}", push.id);
///     }
/// });
///
/// client.open().await?;
/// # Ok(())
/// # }
/// ```
pub struct PushClient {
    config: ClientConfig,
    channels: Arc<PushChannels>,
    session: Arc<Mutex<StreamSession>>,
}

impl PushClient {
    /// Create a new client
    ///
    /// Builds the typed channel hub and generates the client identifier.
    /// No connection is made until `open()`.
    pub fn new(config: ClientConfig) -> Self {
        let channels = Arc::new(PushChannels::new(config.broadcast_capacity));

        Self {
            config,
            channels,
            session: Arc::new(Mutex::new(StreamSession::new())),
        }
    }

    /// The per-kind broadcast channels
    pub fn channels(&self) -> &PushChannels {
        &self.channels
    }

    /// The identifier this client presents to the server
    pub async fn client_id(&self) -> String {
        self.session.lock().await.client_id().to_string()
    }

    /// Whether the push connection is currently open
    pub async fn is_open(&self) -> bool {
        self.session.lock().await.is_open()
    }

    /// Open the push connection subscribing to the full set of event kinds
    ///
    /// Must be called within an authenticated context: the ambient headers
    /// in the config are the only session identity the server sees. If the
    /// connection is already open this does nothing.
    pub async fn open(&self) -> Result<()> {
        self.open_with(&EventKind::ALL, None).await
    }

    /// Open a connection scoped to identity provider callbacks only
    ///
    /// For flows where there is no authenticated session yet; `request_id`
    /// correlates the callback with the request that initiated it.
    pub async fn open_for_identity_callback(&self, request_id: &str) -> Result<()> {
        self.open_with(&[EventKind::IdentityProviderCallback], Some(request_id))
            .await
    }

    /// Close the push connection
    ///
    /// Aborts the reader task and marks the session closed. Events already
    /// handed to the channels stay delivered; nothing further arrives.
    /// Closing an already-closed session does nothing.
    pub async fn close(&self) {
        let mut session = self.session.lock().await;

        if let Some(task) = session.take_task() {
            task.abort();
        }

        if session.is_open() {
            session.mark_closed();
            tracing::info!(client_id = %session.client_id(), "push stream closed");
        } else {
            tracing::debug!("push stream already closed");
        }
    }

    async fn open_with(&self, kinds: &[EventKind], idp_request_id: Option<&str>) -> Result<()> {
        let mut session = self.session.lock().await;

        if session.is_open() {
            tracing::debug!(client_id = %session.client_id(), "push stream already open");
            return Ok(());
        }

        let root_url = self.config.root_url.as_str();
        if !(root_url.starts_with("http://") || root_url.starts_with("https://")) {
            return Err(Error::InvalidUrl(root_url.to_string()));
        }
        let url = url_join(root_url, &SUBSCRIBE_PATH);

        let mut query: Vec<(&str, String)> = Vec::with_capacity(kinds.len() + 2);
        query.push(("clientId", session.client_id().to_string()));
        for kind in kinds {
            query.push(("kinds", kind.as_str().to_string()));
        }
        if let Some(request_id) = idp_request_id {
            query.push(("identityProviderRequestId", request_id.to_string()));
        }

        let http = reqwest::Client::builder()
            .connect_timeout(self.config.connect_timeout)
            .build()
            .map_err(Error::Connect)?;

        let response = http
            .get(&url)
            .headers(self.config.headers.clone())
            .header(header::ACCEPT, "text/event-stream")
            .query(&query)
            .send()
            .await
            .map_err(Error::Connect)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::SubscriptionRejected(status));
        }

        tracing::info!(
            client_id = %session.client_id(),
            kinds = kinds.len(),
            "push stream opened"
        );

        let task = tokio::spawn(run_stream(
            response,
            kinds.to_vec(),
            Arc::clone(&self.channels),
            Arc::clone(&self.session),
        ));
        session.opened(kinds, task);

        Ok(())
    }
}

/// Read the connection until it ends or a logout arrives
///
/// Runs as the single reader task: events are dispatched in wire order, one
/// at a time, so no cross-kind reordering can happen. Only subscribed kinds
/// are dispatched. On `loggedOut` the connection is dropped and the session
/// marked closed before the logout signal is published; events decoded
/// after it are discarded.
async fn run_stream(
    response: reqwest::Response,
    kinds: Vec<EventKind>,
    channels: Arc<PushChannels>,
    session: Arc<Mutex<StreamSession>>,
) {
    let mut stream = response.bytes_stream();
    let mut decoder = SseDecoder::new();
    let mut logout = None;

    'read: while let Some(chunk) = stream.next().await {
        let bytes = match chunk {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(error = %err, "push stream transport error");
                break;
            }
        };

        for event in decoder.feed(&bytes) {
            let kind = match event.name.parse::<EventKind>() {
                Ok(kind) => kind,
                Err(_) => {
                    tracing::debug!(event = %event.name, "ignoring event of unknown kind");
                    continue;
                }
            };
            if !kinds.contains(&kind) {
                tracing::debug!(kind = %kind, "ignoring unsubscribed event kind");
                continue;
            }

            if kind == EventKind::LoggedOut {
                logout = Some(event);
                break 'read;
            }

            channels.dispatch(kind, event.body());
        }
    }

    // Tear the connection down before anything else is published
    drop(stream);
    session.lock().await.mark_closed();

    if let Some(event) = logout {
        channels.dispatch(EventKind::LoggedOut, event.body());
        tracing::info!("push stream closed after logout");
    } else {
        tracing::debug!("push stream ended");
    }
}

/// Join URL segments onto a base, normalizing slashes
fn url_join(base: &str, parts: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for part in parts {
        url.push('/');
        url.push_str(part.trim_matches('/'));
    }
    url
}
