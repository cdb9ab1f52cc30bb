//! istm: render and check localized error dictionaries

use anyhow::Result;
use clap::Parser;
use istm_cli::commands::{Commands, GlobalArgs};

/// Localized structured error messages from a nested dictionary
#[derive(Debug, Parser)]
#[command(name = "istm", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.global.init_logging()?;
    cli.command.execute(&cli.global)
}
