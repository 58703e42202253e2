//! Validate a puzzle definition file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use puzzle_content::PuzzleLoader;
use puzzle_core::{Direction, Puzzle};

/// Load a puzzle file and report its shape or configuration error
#[derive(Parser, Debug)]
pub struct Validate {
    /// RON puzzle definition to check
    pub file: PathBuf,

    /// Also list every clue in cycle order
    #[arg(short, long)]
    pub verbose: bool,
}

impl Validate {
    pub fn execute(self) -> Result<()> {
        let puzzle = match PuzzleLoader::load(&self.file) {
            Ok(puzzle) => puzzle,
            Err(e) => {
                eprintln!(
                    "{} {}",
                    style("✗ Invalid puzzle").red().bold(),
                    style(self.file.display()).dim()
                );
                eprintln!("  {:#}", e);
                return Err(e);
            }
        };

        println!(
            "{} {}",
            style("✓ Valid puzzle").green().bold(),
            style(self.file.display()).dim()
        );
        for line in summary(&puzzle) {
            println!("  {line}");
        }

        if self.verbose {
            println!();
            for &word in puzzle.cycle_order() {
                let word = puzzle.word(word);
                println!("  {:<10} {}", style(word.id).cyan(), word.clue);
            }
        }

        Ok(())
    }
}

fn summary(puzzle: &Puzzle) -> Vec<String> {
    let count = |direction| puzzle.definition().words_in(direction).len();
    vec![
        format!("Title:  {}", puzzle.title()),
        format!("Grid:   {}", puzzle.bounds()),
        format!(
            "Words:  {} ({} across, {} down)",
            puzzle.words().len(),
            count(Direction::Across),
            count(Direction::Down)
        ),
        format!(
            "Cells:  {} active of {}",
            puzzle.index().active_count(),
            puzzle.bounds().cell_count()
        ),
    ]
}
