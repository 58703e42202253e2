//! Clean client logs command
//!
//! Safety: Always prompts for confirmation before deletion unless `-y`.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::io::{self, Write};

use crate::dirs;

/// Delete client logs
#[derive(Parser, Debug)]
pub struct Clean {
    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Specific session to clean (defaults to every session)
    #[arg(long)]
    pub session: Option<String>,
}

impl Clean {
    pub fn execute(self) -> Result<()> {
        let log_dir = dirs::log_dir();

        let (label, target) = match &self.session {
            Some(session_id) => (format!("Session logs ({})", session_id), log_dir.join(session_id)),
            None => ("All logs".to_string(), log_dir),
        };

        if !target.exists() {
            println!(
                "{}",
                style("Nothing to clean - log directory doesn't exist yet").dim()
            );
            return Ok(());
        }

        println!("{}", style("Clean crossword logs").yellow().bold());
        println!();
        println!("The following will be deleted:");
        println!("  {} {}", style("→").cyan(), style(&label).bold());
        println!("    {}", style(target.display()).dim());
        println!();

        if !self.yes && !confirm()? {
            println!("{}", style("Cancelled").dim());
            return Ok(());
        }

        print!("Deleting {}... ", label);
        io::stdout().flush()?;

        std::fs::remove_dir_all(&target)
            .with_context(|| format!("Failed to delete: {}", target.display()))?;

        println!("{}", style("✓").green());
        Ok(())
    }
}

/// Prompt user for confirmation
fn confirm() -> Result<bool> {
    print!("{} ", style("Proceed? [y/N]").yellow().bold());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}
