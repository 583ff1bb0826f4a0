use std::sync::Arc;

use tracing::info;

use crate::config::{MAX_WORKERS, MIN_WORKERS, RunConfig};
use crate::error::{AppError, AppResult, ValidationError};
use crate::fingerprint::{FingerprintGenerator, PROFILE_POOL};
use crate::pacing::{MAX_DELAY_MS, MIN_DELAY_MS, SESSION_MAX, SESSION_MIN};
use crate::shutdown::ShutdownSender;
use crate::stats::{Stats, StatsSnapshot};
use crate::target::Target;

use super::transport::{HttpTransport, Transport};
use super::worker::{WorkerContext, run_worker};

/// Orchestrates one run: validates the configuration, spawns the configured
/// number of request workers against one shared transport, and drains them
/// on cancellation.
pub struct WorkerPool {
    target: Target,
    worker_count: usize,
    fingerprints: Arc<FingerprintGenerator>,
    stats: Arc<Stats>,
}

impl WorkerPool {
    /// Fails fast on a configuration the input layer should have clamped or
    /// rejected: an out-of-range worker count or an empty target host.
    ///
    /// # Errors
    ///
    /// Returns a validation error for invalid configuration.
    pub fn new(config: &RunConfig) -> AppResult<Self> {
        if !(MIN_WORKERS..=MAX_WORKERS).contains(&config.worker_count) {
            return Err(AppError::validation(ValidationError::WorkerCountOutOfRange {
                value: config.worker_count,
                min: MIN_WORKERS,
                max: MAX_WORKERS,
            }));
        }
        let target = Target::new(&config.host, config.port, config.use_tls)?;
        let fingerprints = Arc::new(FingerprintGenerator::new(&target)?);
        Ok(Self {
            target,
            worker_count: config.worker_count,
            fingerprints,
            stats: Arc::new(Stats::new()),
        })
    }

    #[must_use]
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Builds the shared client and runs workers against the real target.
    ///
    /// # Errors
    ///
    /// Returns an error when the client cannot be built or a worker task
    /// fails to join.
    pub async fn run(&self, shutdown_tx: &ShutdownSender) -> AppResult<StatsSnapshot> {
        let client = super::build_client(self.worker_count)?;
        let transport: Arc<dyn Transport> =
            Arc::new(HttpTransport::new(client, &self.target));
        self.run_with_transport(transport, shutdown_tx).await
    }

    /// Runs the worker loops against an arbitrary transport. Returns after
    /// every worker has observed the cancellation signal and exited; an
    /// in-flight request is allowed to finish or time out on its own.
    ///
    /// # Errors
    ///
    /// Returns an error when a worker task fails to join.
    pub async fn run_with_transport(
        &self,
        transport: Arc<dyn Transport>,
        shutdown_tx: &ShutdownSender,
    ) -> AppResult<StatsSnapshot> {
        info!(
            target = self.target.url(),
            workers = self.worker_count,
            "starting request workers"
        );
        info!(
            profiles = PROFILE_POOL.len(),
            delay_ms_min = MIN_DELAY_MS,
            delay_ms_max = MAX_DELAY_MS,
            session_min = SESSION_MIN,
            session_max = SESSION_MAX,
            "fingerprint rotation active"
        );

        let mut handles = Vec::with_capacity(self.worker_count);
        for worker_id in 0..self.worker_count {
            let context = WorkerContext {
                transport: Arc::clone(&transport),
                fingerprints: Arc::clone(&self.fingerprints),
                stats: Arc::clone(&self.stats),
                shutdown_tx: shutdown_tx.clone(),
            };
            handles.push(tokio::spawn(run_worker(context, worker_id)));
        }

        // Drain, not abort: join every worker before reporting.
        for handle in handles {
            handle.await?;
        }

        Ok(self.stats.snapshot())
    }

    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}
