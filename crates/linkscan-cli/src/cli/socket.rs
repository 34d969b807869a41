//! Serving socket: JSON-lines request/response over a Unix domain socket.
//!
//! One request per line, one JSON reply per line. A line `{"op":"health"}`
//! answers the liveness probe; any other JSON value is treated as a
//! classification payload (`{"url": <string>}`). Per-connection tasks share
//! the service through an `Arc`; the loaded artifact is read-only, so no
//! locking is involved.

use anyhow::{Context, Result};
use linkscan_core::service::{health, Service};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{UnixListener, UnixStream};

/// Fallback body when even serializing a response fails.
const SERVER_ERROR_BODY: &str = r#"{"error":"Server error"}"#;

/// Binds the socket (replacing a stale file) and serves until the process
/// is killed. Each accepted connection gets its own task.
pub async fn serve(service: Arc<Service>, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let _ = std::fs::remove_file(path);
    let listener = UnixListener::bind(path)
        .with_context(|| format!("cannot bind serving socket at {}", path.display()))?;
    tracing::info!(path = %path.display(), "serving classification requests");

    loop {
        match listener.accept().await {
            Ok((stream, _)) => {
                let svc = Arc::clone(&service);
                tokio::spawn(handle_connection(svc, stream));
            }
            Err(e) => tracing::debug!("socket accept: {}", e),
        }
    }
}

async fn handle_connection(service: Arc<Service>, stream: UnixStream) {
    let (read, mut write) = stream.into_split();
    let mut lines = BufReader::new(read).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let reply = respond_line(&service, &line);
        if write.write_all(reply.as_bytes()).await.is_err() {
            break;
        }
        if write.write_all(b"\n").await.is_err() {
            break;
        }
    }
}

/// Handles one request line. Never panics and never returns an unserialized
/// error: anything unexpected becomes a generic server-error body, so a bad
/// request can only ever fail itself.
pub fn respond_line(service: &Service, line: &str) -> String {
    let payload: Value = serde_json::from_str(line).unwrap_or(Value::Null);

    if payload.get("op").and_then(|v| v.as_str()) == Some("health") {
        return serde_json::to_string(&health()).unwrap_or_else(|_| SERVER_ERROR_BODY.to_string());
    }

    let body = match service.classify_payload(&payload) {
        Ok(resp) => serde_json::to_string(&resp),
        Err(err) => serde_json::to_string(&err.to_error_response()),
    };
    body.unwrap_or_else(|e| {
        tracing::error!("response serialization failed: {}", e);
        SERVER_ERROR_BODY.to_string()
    })
}

/// Sends one request line to a running server and returns its reply line.
pub async fn send_request(path: &Path, line: &str) -> Result<String> {
    let stream = UnixStream::connect(path)
        .await
        .with_context(|| format!("cannot connect to server at {}", path.display()))?;
    let (read, mut write) = stream.into_split();
    write.write_all(line.as_bytes()).await?;
    write.write_all(b"\n").await?;
    let mut lines = BufReader::new(read).lines();
    lines
        .next_line()
        .await?
        .context("server closed the connection without replying")
}
