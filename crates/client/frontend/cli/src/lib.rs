//! Terminal UI frontend for the crossword.
//!
//! This crate provides a terminal-based presentation sink for a
//! [`PuzzleSession`](client_frontend_core::PuzzleSession) and implements
//! the `client_frontend_core::Frontend` trait.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives the validated puzzle from the composition root
//! - Owns a [`TerminalSink`] that records what the session asks it to show
//! - Maps key and mouse input to session operations and redraws each change

mod app;
mod config;
mod confetti;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod sink;

pub use app::CliFrontend;
pub use config::{CliConfig, ConfettiConfig, UiConfig};
pub use sink::TerminalSink;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
