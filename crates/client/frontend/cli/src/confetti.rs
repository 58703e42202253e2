//! Falling-confetti celebration shown after the puzzle is solved.
//!
//! An initial burst is followed by a steady stream of small batches until
//! [`Confetti::stop`] is called; pieces already in the air finish their fall.
//! Positions are normalized to `0.0..=1.0` so the widget can scale them to
//! any area.

use std::time::Duration;

use rand::prelude::*;
use rand::rngs::StdRng;
use ratatui::style::Color;

const STREAM_BATCH: usize = 8;
const STREAM_INTERVAL: Duration = Duration::from_millis(300);
const MIN_FALL_SECS: f32 = 2.0;
const MAX_FALL_SECS: f32 = 4.0;

const PALETTE: [Color; 12] = [
    Color::Red,
    Color::LightRed,
    Color::Yellow,
    Color::LightYellow,
    Color::Green,
    Color::LightGreen,
    Color::Cyan,
    Color::LightCyan,
    Color::Blue,
    Color::LightBlue,
    Color::Magenta,
    Color::LightMagenta,
];

const SHAPES: [char; 3] = ['■', '●', '▲'];

#[derive(Clone, Debug)]
struct Piece {
    x: f32,
    drift: f32,
    spawned_at: Duration,
    fall: Duration,
    color: Color,
    shape: char,
}

/// A piece's position at the current time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieceView {
    pub x: f32,
    pub y: f32,
    pub color: Color,
    pub shape: char,
}

pub struct Confetti {
    rng: StdRng,
    pieces: Vec<Piece>,
    clock: Duration,
    streaming: bool,
    next_batch: Duration,
}

impl Confetti {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    #[cfg(test)]
    fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            pieces: Vec::new(),
            clock: Duration::ZERO,
            streaming: false,
            next_batch: Duration::ZERO,
        }
    }

    /// Launches `burst` pieces and starts the stream.
    pub fn start(&mut self, burst: usize) {
        self.spawn(burst);
        self.streaming = true;
        self.next_batch = self.clock + STREAM_INTERVAL;
    }

    /// Stops the stream; airborne pieces keep falling.
    pub fn stop(&mut self) {
        self.streaming = false;
    }

    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    pub fn is_active(&self) -> bool {
        self.streaming || !self.pieces.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Advances time, retiring landed pieces and emitting stream batches.
    pub fn tick(&mut self, elapsed: Duration) {
        self.clock += elapsed;

        let clock = self.clock;
        self.pieces
            .retain(|piece| clock < piece.spawned_at + piece.fall);

        while self.streaming && self.next_batch <= self.clock {
            self.spawn(STREAM_BATCH);
            self.next_batch += STREAM_INTERVAL;
        }
    }

    pub fn pieces(&self) -> impl Iterator<Item = PieceView> + '_ {
        self.pieces.iter().map(|piece| {
            let age = self.clock.saturating_sub(piece.spawned_at);
            let progress = (age.as_secs_f32() / piece.fall.as_secs_f32()).clamp(0.0, 1.0);
            PieceView {
                x: (piece.x + piece.drift * progress).clamp(0.0, 1.0),
                y: progress,
                color: piece.color,
                shape: piece.shape,
            }
        })
    }

    fn spawn(&mut self, count: usize) {
        for _ in 0..count {
            let piece = Piece {
                x: self.rng.random_range(0.0..1.0),
                drift: self.rng.random_range(-0.1..0.1),
                spawned_at: self.clock,
                fall: Duration::from_secs_f32(self.rng.random_range(MIN_FALL_SECS..MAX_FALL_SECS)),
                color: *PALETTE.choose(&mut self.rng).unwrap_or(&Color::White),
                shape: *SHAPES.choose(&mut self.rng).unwrap_or(&'■'),
            };
            self.pieces.push(piece);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_then_stream() {
        let mut confetti = Confetti::seeded(7);
        confetti.start(60);
        assert_eq!(confetti.len(), 60);

        confetti.tick(Duration::from_millis(299));
        assert_eq!(confetti.len(), 60);
        confetti.tick(Duration::from_millis(1));
        assert_eq!(confetti.len(), 68);
        confetti.tick(Duration::from_millis(600));
        assert_eq!(confetti.len(), 84);
    }

    #[test]
    fn pieces_land_within_four_seconds_after_stop() {
        let mut confetti = Confetti::seeded(1);
        confetti.start(20);
        confetti.stop();
        assert!(confetti.is_active());

        confetti.tick(Duration::from_millis(1999));
        assert_eq!(confetti.len(), 20);
        confetti.tick(Duration::from_millis(2001));
        assert_eq!(confetti.len(), 0);
        assert!(!confetti.is_active());
    }

    #[test]
    fn pieces_fall_downward_in_unit_space() {
        let mut confetti = Confetti::seeded(3);
        confetti.start(10);
        let before: Vec<_> = confetti.pieces().map(|piece| piece.y).collect();
        confetti.tick(Duration::from_millis(500));

        for (piece, y0) in confetti.pieces().zip(before) {
            assert!(piece.y > y0);
            assert!((0.0..=1.0).contains(&piece.x));
            assert!(SHAPES.contains(&piece.shape));
            assert!(PALETTE.contains(&piece.color));
        }
    }
}
