//! Signal handling for graceful shutdown.

use anyhow::Result;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::timeout;
use tracing::{error, info, warn};

/// Installs Ctrl+C (and, on Unix, SIGTERM) handlers. The returned receiver
/// resolves once either fires.
pub fn setup_signal_handlers() -> Result<oneshot::Receiver<()>> {
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let mut shutdown_tx = Some(shutdown_tx);

    let ctrl_c_tx = shutdown_tx.take();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for ctrl-c: {e}");
            return;
        }
        info!("ctrl-c received");
        if let Some(tx) = ctrl_c_tx {
            let _ = tx.send(());
        }
    });

    #[cfg(unix)]
    {
        use signal_hook::consts::SIGTERM;
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;

        let flag = Arc::new(AtomicBool::new(false));
        signal_hook::flag::register(SIGTERM, flag.clone())?;

        tokio::spawn(async move {
            loop {
                if flag.load(Ordering::Relaxed) {
                    info!("sigterm received");
                    break;
                }
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        });
    }

    Ok(shutdown_rx)
}

/// Waits (bounded by `timeout_secs`) for a spawned workflow task to finish
/// after a shutdown signal, logging but not panicking on timeout.
pub async fn graceful_shutdown(task: tokio::task::JoinHandle<()>, timeout_secs: u64) -> Result<()> {
    info!("starting graceful shutdown");
    match timeout(Duration::from_secs(timeout_secs), task).await {
        Ok(Ok(())) => info!("workflow task stopped cleanly"),
        Ok(Err(e)) => error!("workflow task panicked: {e}"),
        Err(_) => warn!("workflow task did not stop within {timeout_secs}s, shutting down anyway"),
    }
    info!("graceful shutdown complete");
    Ok(())
}
