//! Push event watcher example
//!
//! Subscribes to the push stream of a running service and prints every
//! event as it arrives. Stop with Ctrl-C.
//!
//! Run with: cargo run --example watch_events <ROOT_URL> [SESSION_TOKEN]
//!
//! Examples:
//!   cargo run --example watch_events http://localhost:8888/api
//!   cargo run --example watch_events https://demo.example.org/api abc123
//!
//! The session token, when given, is sent as the `Session-Token` header —
//! the ambient auth header the server expects from a logged-in client.

use push_stream::{ClientConfig, PushClient};
use reqwest::header::{HeaderName, HeaderValue};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,push_stream=debug".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let root_url = args
        .next()
        .unwrap_or_else(|| "http://localhost:8888/api".to_string());

    let mut config = ClientConfig::new(root_url);
    if let Some(token) = args.next() {
        config = config.header(
            HeaderName::from_static("session-token"),
            HeaderValue::from_str(&token)?,
        );
    }

    let client = PushClient::new(config);
    println!("client id: {}", client.client_id().await);

    let mut notifications = client.channels().subscribe_new_notifications();
    tokio::spawn(async move {
        while let Ok(push) = notifications.recv().await {
            println!(
                "notification #{}: {}",
                push.id,
                push.subject.as_deref().unwrap_or("(no subject)")
            );
        }
    });

    let mut messages = client.channels().subscribe_new_messages();
    tokio::spawn(async move {
        while let Ok(push) = messages.recv().await {
            println!(
                "message #{} from {}",
                push.id,
                push.from.as_deref().unwrap_or("?")
            );
        }
    });

    let mut tickets = client.channels().subscribe_tickets();
    tokio::spawn(async move {
        while let Ok(ticket) = tickets.recv().await {
            println!(
                "ticket #{} -> {}",
                ticket.id,
                ticket.status.as_deref().unwrap_or("?")
            );
        }
    });

    let mut permissions = client.channels().subscribe_permissions_changed();
    tokio::spawn(async move {
        while permissions.recv().await.is_ok() {
            println!("permissions changed, reload account data");
        }
    });

    let mut logged_out = client.channels().subscribe_logged_out();

    client.open().await?;
    println!("stream open, waiting for events");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            println!("interrupted, closing");
            client.close().await;
        }
        _ = logged_out.recv() => {
            println!("logged out by the server");
        }
    }

    Ok(())
}
