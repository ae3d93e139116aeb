use std::io::ErrorKind;

use anyhow::{Context, Result, anyhow};
use tokio::net::TcpListener;
use tracing::warn;

/// Binds `host:start_port`, moving to the next port while the current one is taken.
pub async fn bind_with_fallback(
    host: &str,
    start_port: u16,
    max_attempts: u16,
) -> Result<TcpListener> {
    for offset in 0..max_attempts {
        let Some(port) = start_port.checked_add(offset) else {
            break;
        };

        match TcpListener::bind((host, port)).await {
            Ok(listener) => return Ok(listener),
            Err(err) if err.kind() == ErrorKind::AddrInUse => {
                warn!(port, "port is in use, trying the next one");
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to bind {host}:{port}"));
            }
        }
    }

    Err(anyhow!(
        "no free port found starting at {start_port} after {max_attempts} attempts"
    ))
}
