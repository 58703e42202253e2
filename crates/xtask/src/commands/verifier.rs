//! Derive verifier tokens for puzzle authors.
//!
//! Puzzle files store `verifier: "<hex>"` instead of answers; this command
//! produces those values.

use anyhow::Result;
use clap::Parser;
use console::style;
use puzzle_core::{Verifier, normalize_answer};

/// Derive verifier tokens for answers
#[derive(Parser, Debug)]
pub struct VerifierCmd {
    /// Answers to hash (letters only; case and punctuation are ignored)
    #[arg(required = true)]
    pub answers: Vec<String>,

    /// Print only the hex tokens, one per line
    #[arg(short, long)]
    pub quiet: bool,
}

impl VerifierCmd {
    pub fn execute(self) -> Result<()> {
        for answer in &self.answers {
            let (normalized, token) = derive(answer);
            if self.quiet {
                println!("{token}");
                continue;
            }

            if normalized.is_empty() {
                eprintln!(
                    "{} {} has no letters",
                    style("!").yellow().bold(),
                    style(answer).cyan()
                );
            }
            println!(
                "{:<16} {}",
                style(&normalized).bold(),
                style(token).green()
            );
        }
        Ok(())
    }
}

fn derive(answer: &str) -> (String, String) {
    let normalized = normalize_answer(answer);
    let token = Verifier::derive(&normalized).to_hex();
    (normalized, token)
}
