//! CLI argument definitions.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "decision-cli", about = "Operator CLI for the decision core")]
pub struct DecisionCli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the resolved configuration (defaults + file + env overrides) as JSON.
    ShowConfig,

    /// Run one weekly cycle against the configured data directory's JSON
    /// snapshot adapters and print the resulting decision.
    Run {
        /// Gameweek number to run the cycle for.
        #[arg(long)]
        gameweek: u32,
    },
}
