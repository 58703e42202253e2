//! Tail client logs command
//!
//! Follows a session's `client.log` like `tail -f`; the TUI never writes
//! logs to the terminal, so this is the way to watch a running client.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Duration;

use crate::dirs;

/// Monitor client logs in real-time
#[derive(Parser, Debug)]
pub struct TailLogs {
    /// Specific session ID to monitor (defaults to latest)
    pub session: Option<String>,

    /// Number of lines to show from history before tailing
    #[arg(short = 'n', long, default_value = "10")]
    pub lines: usize,

    /// Poll interval in milliseconds
    #[arg(long, default_value = "100")]
    pub poll_interval: u64,
}

impl TailLogs {
    pub fn execute(self) -> Result<()> {
        let log_dir = dirs::log_dir();

        if !log_dir.exists() {
            eprintln!("{}", style("✗ Log directory not found").red().bold());
            eprintln!("  Path: {}", style(log_dir.display()).dim());
            eprintln!();
            eprintln!("  Run the client first to generate logs:");
            eprintln!("    {}", style("cargo run -p crossword-client").cyan());
            anyhow::bail!("Log directory does not exist");
        }

        let (session_id, log_path) = match &self.session {
            Some(session) => (session.clone(), dirs::find_session_log(&log_dir, session)?),
            None => dirs::find_latest_log(&log_dir).context("Failed to find latest log file")?,
        };

        println!("{}", style("Monitoring crossword logs").green().bold());
        println!("  Session:  {}", style(&session_id).cyan());
        println!("  Log file: {}", style(log_path.display()).dim());
        println!();

        self.follow(&log_path)
    }

    /// Prints the last N lines, then polls for appended content.
    fn follow(&self, path: &Path) -> Result<()> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        let mut reader = BufReader::new(file);

        let mut history = VecDeque::with_capacity(self.lines);
        let mut line = String::new();
        while reader.read_line(&mut line)? > 0 {
            if history.len() == self.lines {
                history.pop_front();
            }
            if self.lines > 0 {
                history.push_back(std::mem::take(&mut line));
            }
            line.clear();
        }
        for entry in history {
            print!("{}", entry);
        }

        let poll_interval = Duration::from_millis(self.poll_interval);
        loop {
            line.clear();
            match reader.read_line(&mut line) {
                Ok(0) => std::thread::sleep(poll_interval),
                Ok(_) => print!("{}", line),
                Err(e) => {
                    return Err(e).context("Failed to read log file");
                }
            }
        }
    }
}
