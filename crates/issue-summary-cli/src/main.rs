//! `issue-summary` binary: regenerates summary issues for one GitHub event.

mod bootstrap_helpers;
mod cli_args;
mod summary_command;

use anyhow::Result;
use clap::Parser;

use crate::bootstrap_helpers::init_tracing;
use crate::cli_args::Cli;
use crate::summary_command::run_cli;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    run_cli(cli).await?;
    Ok(())
}
