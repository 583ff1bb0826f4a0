//! Shared HTTP client, the worker loop, and the pool orchestrator.
mod pool;
mod transport;
mod worker;

use std::time::Duration;

use reqwest::{Client, redirect};

use crate::error::{AppError, AppResult, HttpError};

pub use pool::WorkerPool;
pub use transport::{HttpTransport, Transport};

/// Per-request connect timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// Per-request total timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
/// Redirects are followed, up to this many hops.
const REDIRECT_LIMIT: usize = 10;
/// Idle connections are retained this long, mirroring the 5-minute DNS
/// cache the connector layer traditionally keeps.
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(300);

/// Builds the one shared connection pool for a run, sized to the worker
/// count.
///
/// Certificate validation is disabled so self-signed test endpoints work;
/// this client is unsafe for production targets.
///
/// # Errors
///
/// Returns an error when the underlying client cannot be constructed.
pub fn build_client(worker_count: usize) -> AppResult<Client> {
    Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
        .pool_max_idle_per_host(worker_count)
        .pool_idle_timeout(Some(POOL_IDLE_TIMEOUT))
        .danger_accept_invalid_certs(true)
        .build()
        .map_err(|err| AppError::http(HttpError::BuildClient { source: err }))
}

#[cfg(test)]
mod tests;
