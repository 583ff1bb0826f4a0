//! Cancellation is data: a one-way boolean carried on a watch channel.
//! Sending `true` is idempotent, and receivers created after the fact still
//! observe the stop state.

use tokio::sync::watch;

pub type ShutdownSender = watch::Sender<bool>;
pub type ShutdownReceiver = watch::Receiver<bool>;

/// Level check at a worker's polling points.
#[must_use]
pub fn is_stopped(shutdown_rx: &ShutdownReceiver) -> bool {
    *shutdown_rx.borrow()
}

/// Suspends until the stop flag is set (or every sender is gone).
pub async fn wait_for_stop(shutdown_rx: &mut ShutdownReceiver) {
    if *shutdown_rx.borrow() {
        return;
    }
    while shutdown_rx.changed().await.is_ok() {
        if *shutdown_rx.borrow() {
            return;
        }
    }
}
