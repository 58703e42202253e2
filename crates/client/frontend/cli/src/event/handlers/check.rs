//! Verification handlers.

use anyhow::Result;
use client_frontend_core::{MessageEntry, MessageLevel};
use puzzle_core::Verdict;

use super::super::EventLoop;
use crate::presentation::terminal::Tui;

impl EventLoop {
    /// Snapshot the grid and verify it on a background task.
    pub(in crate::event) fn start_check(&mut self) {
        let Some(pending) = self.session.begin_check() else {
            self.session.sink_mut().messages_mut().push(MessageEntry::new(
                "A check is already running.",
                MessageLevel::Info,
            ));
            return;
        };

        self.session
            .sink_mut()
            .messages_mut()
            .push_text("Checking answers...");

        let tx_verdict = self.tx_verdict.clone();
        tokio::spawn(async move {
            let verdict = pending.run().await;
            if tx_verdict.send(verdict).await.is_err() {
                tracing::warn!("Verdict dropped: event loop closed");
            }
        });
    }

    pub(in crate::event) fn handle_verdict(
        &mut self,
        verdict: Verdict,
        terminal: &mut Tui,
    ) -> Result<()> {
        self.session.complete_check(verdict);
        self.render(terminal)
    }
}
