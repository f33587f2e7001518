//! kugiri command-line entry point

use anyhow::Result;
use clap::Parser;

use kugiri_cli::commands::Commands;

/// Unicode text segmentation from the command line
#[derive(Debug, Parser)]
#[command(name = "kugiri", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Segment(args) => args.execute(),
        Commands::Inspect(args) => args.execute(),
    }
}
