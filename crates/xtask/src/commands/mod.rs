//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod clean;
mod tail_logs;
mod validate;
mod verifier;

pub use clean::Clean;
pub use tail_logs::TailLogs;
pub use validate::Validate;
pub use verifier::VerifierCmd;
