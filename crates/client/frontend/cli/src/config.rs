//! CLI-specific configuration for terminal UI.
use std::env;

use client_frontend_core::config::parse_bool;

const MIN_MESSAGE_PANEL_HEIGHT: u16 = 3;
/// Upper bound on the initial confetti burst.
pub const MAX_CONFETTI_BURST: usize = 500;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    pub confetti: ConfettiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 6)
    /// - `CLI_CONFETTI` - Celebrate a solved puzzle (default: true)
    /// - `CLI_CONFETTI_BURST` - Pieces in the initial burst (default: 60, max: 500)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let parse = |key: &str| var(key).and_then(|raw| raw.trim().parse::<usize>().ok());

        if let Some(height) = parse("CLI_MESSAGE_PANEL_HEIGHT") {
            let height = u16::try_from(height).unwrap_or(u16::MAX);
            config.ui.message_panel_height = height.max(MIN_MESSAGE_PANEL_HEIGHT);
        }

        if let Some(enabled) = var("CLI_CONFETTI").as_deref().and_then(parse_bool) {
            config.confetti.enabled = enabled;
        }

        if let Some(burst) = parse("CLI_CONFETTI_BURST") {
            config.confetti.burst = burst.min(MAX_CONFETTI_BURST);
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 6,
        }
    }
}

/// Celebration shown after a successful check.
#[derive(Clone, Debug)]
pub struct ConfettiConfig {
    pub enabled: bool,
    pub burst: usize,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            burst: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(vars: &[(&str, &str)]) -> CliConfig {
        CliConfig::from_vars(|key| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        })
    }

    #[test]
    fn defaults_without_overrides() {
        let config = config(&[]);
        assert_eq!(config.ui.message_panel_height, 6);
        assert!(config.confetti.enabled);
        assert_eq!(config.confetti.burst, 60);
    }

    #[test]
    fn confetti_burst_is_capped() {
        let config = config(&[("CLI_CONFETTI_BURST", "1000000")]);
        assert_eq!(config.confetti.burst, MAX_CONFETTI_BURST);

        let config = self::config(&[("CLI_CONFETTI_BURST", "120")]);
        assert_eq!(config.confetti.burst, 120);
    }

    #[test]
    fn panel_height_and_switch_are_parsed() {
        let config = config(&[
            ("CLI_MESSAGE_PANEL_HEIGHT", "1"),
            ("CLI_CONFETTI", "off"),
        ]);
        assert_eq!(config.ui.message_panel_height, 3);
        assert!(!config.confetti.enabled);

        let config = self::config(&[("CLI_MESSAGE_PANEL_HEIGHT", "not a number")]);
        assert_eq!(config.ui.message_panel_height, 6);
    }
}
