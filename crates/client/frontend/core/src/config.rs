//! Frontend configuration structures and loaders.
//!
//! This module contains settings that are shared across different frontend
//! implementations (CLI, GUI, etc.).

use std::env;
use std::path::PathBuf;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    /// Puzzle definition to load instead of the bundled one.
    pub puzzle_file: Option<PathBuf>,
    pub messages: MessageConfig,
}

impl FrontendConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CROSSWORD_PUZZLE_FILE` - RON puzzle definition (default: bundled puzzle)
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = env::var_os("CROSSWORD_PUZZLE_FILE").filter(|p| !p.is_empty()) {
            config.puzzle_file = Some(PathBuf::from(path));
        }

        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

pub(crate) fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Parses common boolean spellings (`true`/`1`/`yes`/`on` and negations).
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
