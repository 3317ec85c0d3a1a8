//! Command implementations for the wxt CLI.
//!
//! Provides the `fetch` subcommand, which queries the Meteomatics
//! weather API, saves the raw response, and prints a per-parameter
//! summary for JSON output.

use clap::Subcommand;

pub mod fetch;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch weather data for a point or grid and summarize it
    Fetch(fetch::FetchArgs),
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch(args) => fetch::run_fetch(args).await,
    }
}
