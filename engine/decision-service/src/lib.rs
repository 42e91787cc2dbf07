//! Decision core orchestration library.
//!
//! Wires the nine standalone components into the weekly
//! refresh/sweep/predict/adjust/optimise/plan/emit/learn cycle described in
//! [`workflow`], plus the configuration, logging and signal-handling
//! scaffolding an operator needs to run it as a long-lived process.

pub mod adapters;
pub mod config;
pub mod error;
pub mod logging;
pub mod service;
pub mod signals;
pub mod workflow;

pub use config::{DecisionCoreSettings, ServiceConfig};
pub use error::{DecisionCoreError, Result};
pub use logging::{initialize_logging, initialize_logging_with_config};
pub use service::ServiceState;
pub use signals::{graceful_shutdown, setup_signal_handlers};
pub use workflow::{learn_from_resolved_gameweek, run_weekly_cycle, Collaborators};

/// Loads configuration from an optional file plus environment overrides.
pub fn load_configuration() -> anyhow::Result<ServiceConfig> {
    config::load_config()
}
