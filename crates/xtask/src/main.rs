//! Development tasks for the crossword project
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo run -p xtask -- <command>`

mod commands;
mod dirs;

use anyhow::Result;
use clap::Parser;
use commands::{Clean, TailLogs, Validate, VerifierCmd};

/// Development tasks for the crossword project
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the crossword", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Derive verifier tokens for answers
    Verifier(VerifierCmd),

    /// Load a puzzle file and report its shape or configuration error
    Validate(Validate),

    /// Monitor client logs in real-time
    TailLogs(TailLogs),

    /// Delete client logs
    Clean(Clean),
}

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.command {
        Command::Verifier(cmd) => cmd.execute(),
        Command::Validate(cmd) => cmd.execute(),
        Command::TailLogs(cmd) => cmd.execute(),
        Command::Clean(cmd) => cmd.execute(),
    }
}
