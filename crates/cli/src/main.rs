use std::process::ExitCode;

use anyhow::Result;
use availablefonts_cli::cli::Cli;
use clap::Parser;
use env_logger::init;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    init();
    Cli::parse().command.run().await
}
