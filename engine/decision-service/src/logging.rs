//! Logging and tracing setup.

use crate::config::LoggingConfig;
use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, prelude::*, util::SubscriberInitExt, EnvFilter};

/// Initializes logging from the process environment (`RUST_LOG`), falling
/// back to `info`. Used when no explicit [`LoggingConfig`] is available yet.
pub fn initialize_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry().with(env_filter).with(fmt_layer).init();
    Ok(())
}

/// Initializes logging from a loaded [`LoggingConfig`].
pub fn initialize_logging_with_config(cfg: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::new(&cfg.level);

    let fmt_layer = match cfg.format.as_str() {
        "json" => fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        _ => fmt::layer()
            .with_target(false)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
    };

    tracing_subscriber::registry().with(env_filter).with(fmt_layer).init();
    Ok(())
}
