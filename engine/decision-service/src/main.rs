//! Decision core service entry point.
//!
//! Runs the weekly refresh/predict/optimise/plan/learn cycle on a fixed
//! schedule against whatever the configured data directory's JSON snapshot
//! adapters expose, until interrupted.

use anyhow::Context;
use tracing::info;

use decision_service::{
    graceful_shutdown, initialize_logging_with_config, load_configuration, setup_signal_handlers,
    ServiceState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_configuration().context("failed to load configuration")?;
    initialize_logging_with_config(&config.logging)?;

    info!("starting decision core service v{}", env!("CARGO_PKG_VERSION"));

    let service_state = ServiceState::new(config).await?;
    service_state.recover_system_state().await?;

    let shutdown_signal = setup_signal_handlers()?;
    info!("signal handlers configured");

    let shutdown_timeout = service_state.config.service.shutdown_timeout_secs;
    let run_handle = {
        let state = std::sync::Arc::new(service_state);
        let state_for_task = state.clone();
        let handle = tokio::spawn(async move {
            if let Err(e) = state_for_task.run_loop(shutdown_signal).await {
                tracing::error!(error = %e, "run loop exited with error");
            }
        });
        (state, handle)
    };

    info!("decision core service running, press Ctrl+C to stop");
    let (state, handle) = run_handle;
    graceful_shutdown(handle, shutdown_timeout).await?;
    state.shutdown().await?;

    info!("decision core service shutdown complete");
    Ok(())
}
