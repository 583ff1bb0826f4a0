use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::fingerprint::FingerprintGenerator;
use crate::pacing::{self, SessionState};
use crate::shutdown::{ShutdownSender, is_stopped, wait_for_stop};
use crate::stats::{PROGRESS_INTERVAL, Stats};

use super::transport::Transport;

/// Everything a worker shares with the rest of the pool. Session state and
/// the RNG stay private to the worker.
pub(super) struct WorkerContext {
    pub transport: Arc<dyn Transport>,
    pub fingerprints: Arc<FingerprintGenerator>,
    pub stats: Arc<Stats>,
    pub shutdown_tx: ShutdownSender,
}

/// One request loop: poll cancellation, rotate the session when due, issue
/// a single GET with a fresh fingerprint, tally the outcome, pace, repeat.
///
/// Request failures are recoverable and only tallied; the loop ends solely
/// on the cancellation signal.
pub(super) async fn run_worker(context: WorkerContext, worker_id: usize) {
    let mut rng = StdRng::from_entropy();
    let mut shutdown_rx = context.shutdown_tx.subscribe();
    let mut session = SessionState::new(&mut rng);

    loop {
        if is_stopped(&shutdown_rx) {
            break;
        }

        if session.should_rotate() {
            session.rotate(&mut rng);
            if worker_id % 10 == 0 {
                debug!(worker_id, limit = session.session_limit(), "rotating session identity");
            }
        }

        let headers = context.fingerprints.generate(&mut rng);
        match context.transport.fetch(headers).await {
            Ok(status) => {
                let total = context.stats.record_response(status);
                session.record_request();
                if total % PROGRESS_INTERVAL == 0 {
                    let snapshot = context.stats.snapshot();
                    info!("{}", crate::report::progress_line(&snapshot));
                }
            }
            Err(err) => {
                context.stats.record_error();
                debug!(worker_id, error = %err, "request failed");
            }
        }

        // The pacing sleep races the shutdown signal so a cancelled worker
        // exits within one delay, never mid-request.
        let delay = pacing::next_delay(&mut rng);
        tokio::select! {
            () = wait_for_stop(&mut shutdown_rx) => break,
            () = sleep(delay) => {}
        }
    }
}
