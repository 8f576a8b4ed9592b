//! Broadcast listener
//!
//! Local stand-in for the platform push: accepts TCP connections and reads one
//! JSON envelope (`{"target", "content_type", "data"}`) per line. Every parsed
//! envelope is dispatched as [`Action::Broadcast`]; filtering and payload
//! parsing happen in the middleware chain.

use crate::actions::Action;
use crate::middleware::Dispatcher;
use anyhow::{Context, Result};
use gh_activity_feed::BroadcastMessage;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};
use tokio::net::TcpListener;

/// Longest envelope line accepted, newline excluded
pub const MAX_LINE_BYTES: usize = 64 * 1024;

const ACCEPT_BACKOFF_MIN: Duration = Duration::from_millis(100);
const ACCEPT_BACKOFF_MAX: Duration = Duration::from_secs(5);

/// Bind the listener socket.
pub async fn bind(addr: &str) -> Result<TcpListener> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind broadcast listener on {}", addr))?;
    log::info!("Listening for broadcasts on {}", addr);
    Ok(listener)
}

/// Accept connections until the event loop goes away.
pub async fn serve(listener: TcpListener, dispatcher: Dispatcher) {
    let mut failures: u32 = 0;

    while !dispatcher.is_closed() {
        let (socket, peer) = match listener.accept().await {
            Ok(conn) => {
                failures = 0;
                conn
            }
            Err(e) => {
                failures = failures.saturating_add(1);
                let delay = accept_backoff(failures);
                log::error!(
                    "Failed to accept broadcast connection (retrying in {:?}): {}",
                    delay,
                    e
                );
                tokio::time::sleep(delay).await;
                continue;
            }
        };

        log::debug!("Broadcast connection from {}", peer);
        let dispatcher = dispatcher.clone();
        tokio::spawn(async move {
            if let Err(e) = read_messages(socket, &dispatcher).await {
                log::warn!("Broadcast connection from {} failed: {:#}", peer, e);
            }
            log::debug!("Broadcast connection from {} closed", peer);
        });
    }
}

/// Delay before the next `accept` after `failures` errors in a row.
///
/// Doubles from 100ms and stays at 5s once it gets there.
fn accept_backoff(failures: u32) -> Duration {
    let exponent = failures.saturating_sub(1).min(16);
    ACCEPT_BACKOFF_MIN
        .saturating_mul(1 << exponent)
        .min(ACCEPT_BACKOFF_MAX)
}

/// Read newline-delimited envelopes and dispatch them.
///
/// Returns the number of envelopes dispatched. Lines that are not UTF-8, not
/// valid envelopes, or longer than [`MAX_LINE_BYTES`] are logged and skipped.
/// Only I/O errors end the connection.
pub async fn read_messages<R>(reader: R, dispatcher: &Dispatcher) -> Result<usize>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut dispatched = 0;

    loop {
        buf.clear();
        let read = (&mut reader)
            .take(MAX_LINE_BYTES as u64 + 1)
            .read_until(b'\n', &mut buf)
            .await
            .context("Failed to read broadcast line")?;
        if read == 0 {
            break;
        }

        if buf.last() != Some(&b'\n') && buf.len() > MAX_LINE_BYTES {
            log::warn!(
                "Skipping broadcast line longer than {} bytes",
                MAX_LINE_BYTES
            );
            discard_line(&mut reader)
                .await
                .context("Failed to read broadcast line")?;
            continue;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(e) => {
                log::warn!("Skipping broadcast line that is not UTF-8: {}", e);
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        match BroadcastMessage::from_json_line(line) {
            Ok(message) => {
                dispatcher.dispatch(Action::Broadcast(message));
                dispatched += 1;
            }
            Err(e) => log::warn!("Skipping broadcast line: {}", e),
        }
    }

    Ok(dispatched)
}

/// Drop input up to and including the next newline.
async fn discard_line<B>(reader: &mut B) -> std::io::Result<()>
where
    B: AsyncBufRead + Unpin,
{
    loop {
        let chunk = reader.fill_buf().await?;
        if chunk.is_empty() {
            return Ok(());
        }
        match chunk.iter().position(|&b| b == b'\n') {
            Some(end) => {
                reader.consume(end + 1);
                return Ok(());
            }
            None => {
                let len = chunk.len();
                reader.consume(len);
            }
        }
    }
}
