//! fleksja command-line entry point

use clap::Parser;
use fleksja_cli::commands::Commands;
use std::process::ExitCode;

/// Restore grammatical case and gender onto placeholders in anonymized Polish text
#[derive(Debug, Parser)]
#[command(name = "fleksja", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
