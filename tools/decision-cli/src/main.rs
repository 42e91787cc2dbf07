//! Entry point: parse CLI and dispatch to command handlers.

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Command, DecisionCli};
use data_model::GameweekId;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app = DecisionCli::parse();

    match app.command {
        Command::ShowConfig => {
            let config = decision_service::load_configuration().context("failed to load configuration")?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Command::Run { gameweek } => {
            let config = decision_service::load_configuration().context("failed to load configuration")?;
            let state = decision_service::ServiceState::new(config).await?;
            let decision = decision_service::run_weekly_cycle(
                &state.collaborators,
                &state.config.core,
                GameweekId(gameweek),
            )
            .await
            .context("weekly cycle failed")?;
            println!("{}", serde_json::to_string_pretty(&decision)?);
        }
    }

    Ok(())
}
