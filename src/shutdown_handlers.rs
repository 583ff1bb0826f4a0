use tokio::sync::watch;

use crate::shutdown::{ShutdownReceiver, ShutdownSender, wait_for_stop};

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

#[must_use]
pub fn shutdown_channel() -> (ShutdownSender, ShutdownReceiver) {
    watch::channel(false)
}

/// Forwards SIGINT/SIGTERM (ctrl-c on non-unix platforms) into the shutdown
/// flag. Repeat deliveries after the first are no-ops.
pub fn setup_signal_shutdown_handler(shutdown_tx: &ShutdownSender) -> tokio::task::JoinHandle<()> {
    let shutdown_tx = shutdown_tx.clone();
    tokio::spawn(async move {
        let mut shutdown_rx = shutdown_tx.subscribe();

        #[cfg(unix)]
        let mut term_signal = match signal(SignalKind::terminate()) {
            Ok(signal) => Some(signal),
            Err(err) => {
                eprintln!("Failed to register SIGTERM handler: {}", err);
                None
            }
        };

        #[cfg(unix)]
        {
            tokio::select! {
                () = wait_for_stop(&mut shutdown_rx) => {}
                _ = tokio::signal::ctrl_c() => {
                    let _ = shutdown_tx.send(true);
                }
                () = async {
                    if let Some(signal) = term_signal.as_mut() {
                        signal.recv().await;
                    } else {
                        std::future::pending::<()>().await;
                    }
                } => {
                    let _ = shutdown_tx.send(true);
                }
            }
        }

        #[cfg(not(unix))]
        {
            tokio::select! {
                () = wait_for_stop(&mut shutdown_rx) => {}
                _ = tokio::signal::ctrl_c() => {
                    let _ = shutdown_tx.send(true);
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, AppResult};
    use crate::shutdown::is_stopped;
    use std::future::Future;
    use std::time::Duration;

    const SIGNAL_HANDLER_SETTLE: Duration = Duration::from_millis(10);
    const SHUTDOWN_HANDLER_TIMEOUT: Duration = Duration::from_secs(1);

    fn run_async_test<F>(future: F) -> AppResult<()>
    where
        F: Future<Output = AppResult<()>>,
    {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(AppError::from)?;
        runtime.block_on(future)
    }

    #[test]
    fn signal_handler_exits_on_shutdown() -> AppResult<()> {
        run_async_test(async {
            let (shutdown_tx, _shutdown_rx) = shutdown_channel();
            let handle = setup_signal_shutdown_handler(&shutdown_tx);

            tokio::time::sleep(SIGNAL_HANDLER_SETTLE).await;
            assert!(shutdown_tx.send(true).is_ok());

            tokio::time::timeout(SHUTDOWN_HANDLER_TIMEOUT, handle)
                .await
                .map_err(|_| {
                    AppError::from(std::io::Error::new(
                        std::io::ErrorKind::TimedOut,
                        "timed out waiting for shutdown handler",
                    ))
                })?
                .map_err(AppError::from)?;
            Ok(())
        })
    }

    #[test]
    fn repeat_sends_are_idempotent() -> AppResult<()> {
        run_async_test(async {
            let (shutdown_tx, shutdown_rx) = shutdown_channel();
            assert!(!is_stopped(&shutdown_rx));
            let _ = shutdown_tx.send(true);
            let _ = shutdown_tx.send(true);
            assert!(is_stopped(&shutdown_rx));
            Ok(())
        })
    }

    #[test]
    fn late_subscribers_observe_the_stop_state() -> AppResult<()> {
        run_async_test(async {
            let (shutdown_tx, _shutdown_rx) = shutdown_channel();
            let _ = shutdown_tx.send(true);

            let mut late = shutdown_tx.subscribe();
            assert!(is_stopped(&late));
            wait_for_stop(&mut late).await;
            Ok(())
        })
    }
}
