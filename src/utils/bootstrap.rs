//! Bootstrap utilities for mqshim binaries.

use std::time::Duration;

use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LOG_ENV_VAR;
use crate::status::{MqError, Reason};

/// Initialize tracing with the MQSHIM_LOG environment variable.
///
/// Defaults to "info" level if MQSHIM_LOG is not set.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV_VAR)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Reasons after which a connect attempt may succeed later.
fn is_transient(err: &MqError) -> bool {
    matches!(
        err.reason(),
        Some(Reason::Q_MGR_NOT_AVAILABLE | Reason::CONNECTION_BROKEN | Reason::HOST_NOT_AVAILABLE)
    )
}

/// Connect with exponential backoff, up to `attempts` tries.
///
/// Only transient failures are retried; anything else is returned at once.
pub fn connect_with_retry<T, F>(
    queue_manager: &str,
    attempts: u32,
    mut connect: F,
) -> Result<T, MqError>
where
    F: FnMut() -> Result<T, MqError>,
{
    const INITIAL_DELAY: Duration = Duration::from_millis(100);
    const MAX_DELAY: Duration = Duration::from_secs(5);

    let attempts = attempts.max(1);
    let mut delay = INITIAL_DELAY;
    let mut attempt = 0;

    loop {
        attempt += 1;
        match connect() {
            Ok(connection) => {
                tracing::info!(queue_manager, attempt, "Connected");
                return Ok(connection);
            }
            Err(e) if attempt < attempts && is_transient(&e) => {
                warn!(
                    "Failed to connect to '{}' (attempt {}/{}): {}. Retrying in {:?}...",
                    queue_manager, attempt, attempts, e, delay
                );
                std::thread::sleep(delay);
                delay = std::cmp::min(delay * 2, MAX_DELAY);
            }
            Err(e) => {
                tracing::error!(
                    "Failed to connect to '{}' after {} attempts: {}",
                    queue_manager,
                    attempt,
                    e
                );
                return Err(e);
            }
        }
    }
}
