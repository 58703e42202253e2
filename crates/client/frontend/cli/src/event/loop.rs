//! Event loop orchestrating user input, background checks, and rendering.
//!
//! This module coordinates three main concerns:
//! - Keyboard and mouse input mapped to session operations
//! - Verification jobs running off the UI task
//! - Rendering, including the confetti animation

use anyhow::Result;
use tokio::{
    sync::mpsc,
    time::{self, Duration},
};

use crate::{
    TerminalSink,
    config::CliConfig,
    presentation::{ScreenLayout, terminal::Tui},
};
use client_frontend_core::PuzzleSession;
use puzzle_core::Verdict;

const FRAME_INTERVAL_MS: u64 = 16;
const ANIMATION_INTERVAL_MS: u64 = 33;

/// Event loop owning the puzzle session and its terminal sink.
pub struct EventLoop {
    pub(crate) session: PuzzleSession<TerminalSink>,
    pub(crate) cli_config: CliConfig,
    /// Layout of the last frame, for mouse hit testing.
    pub(crate) layout: ScreenLayout,
    pub(crate) tx_verdict: mpsc::Sender<Verdict>,
    rx_verdict: mpsc::Receiver<Verdict>,
}

impl EventLoop {
    pub fn new(session: PuzzleSession<TerminalSink>, cli_config: CliConfig) -> Self {
        // At most one check is in flight at a time.
        let (tx_verdict, rx_verdict) = mpsc::channel(1);

        Self {
            session,
            cli_config,
            layout: ScreenLayout::default(),
            tx_verdict,
            rx_verdict,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<PuzzleSession<TerminalSink>> {
        self.render(terminal)?;

        let animation_period = Duration::from_millis(ANIMATION_INTERVAL_MS);
        let mut animation_interval = time::interval(animation_period);
        animation_interval.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        loop {
            let animating = self.session.sink().confetti().is_active();

            tokio::select! {
                Some(verdict) = self.rx_verdict.recv() => {
                    self.handle_verdict(verdict, terminal)?;
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal)? {
                        break;
                    }
                }
                _ = animation_interval.tick(), if animating => {
                    self.session.sink_mut().confetti_mut().tick(animation_period);
                    self.render(terminal)?;
                }
            }
        }

        Ok(self.session)
    }
}
