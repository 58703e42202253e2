//! Cross-frontend primitives for presenting a puzzle.
//!
//! Houses the puzzle session (navigation, sink driving, asynchronous
//! verification), the view model that records what the sink was told, the
//! message log, and configuration shared by the CLI and future clients.
pub mod config;
pub mod frontend;
pub mod message;
pub mod services;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use services::{EditableGrid, PendingCheck, PuzzleSession, STATUS_PROMPT};
pub use view_model::{CellFlags, CellView, ClueView, Overlay, ViewModel};
