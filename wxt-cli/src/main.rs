//! wxt CLI - Command line tool for fetching Meteomatics weather data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wxt-cli",
    version,
    about = "Meteomatics weather data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: wxt_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    wxt_cmd::run(cli.command).await
}
