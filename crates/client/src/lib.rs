//! Top-level client pairing a validated puzzle with a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Puzzle   (validated definition + cell index, shared via Arc)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The puzzle is loaded before any frontend starts, so configuration errors
//! are fatal at startup and never reach the UI.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use std::sync::Arc;

use anyhow::Result;
use client_frontend_core::FrontendConfig;
use puzzle_content::PuzzleLoader;
use puzzle_core::Puzzle;

/// Top-level client container.
pub struct Client {
    puzzle: Arc<Puzzle>,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn puzzle(&self) -> &Arc<Puzzle> {
        &self.puzzle
    }

    /// Transfers control to the frontend until the user quits.
    pub async fn run(mut self) -> Result<()> {
        tracing::info!(title = self.puzzle.title(), "Running frontend");
        self.frontend.run(Arc::clone(&self.puzzle)).await
    }
}

/// Loads the configured puzzle file, falling back to the bundled puzzle.
pub fn load_puzzle(config: &FrontendConfig) -> Result<Puzzle> {
    match &config.puzzle_file {
        Some(path) => {
            tracing::info!("Loading puzzle from {}", path.display());
            PuzzleLoader::load(path)
        }
        None => {
            tracing::info!("Loading bundled puzzle");
            puzzle_content::bundled()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    #[derive(Default)]
    struct RecordingFrontend {
        seen: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Frontend for RecordingFrontend {
        async fn run(&mut self, puzzle: Arc<Puzzle>) -> Result<()> {
            self.seen.lock().unwrap().push(puzzle.title().to_owned());
            Ok(())
        }
    }

    #[tokio::test]
    async fn client_hands_puzzle_to_frontend() {
        let frontend = RecordingFrontend::default();
        let seen = Arc::clone(&frontend.seen);

        let client = Client::builder()
            .puzzle(puzzle_content::bundled().unwrap())
            .frontend(frontend)
            .build()
            .unwrap();
        let title = client.puzzle().title().to_owned();
        client.run().await.unwrap();

        assert_eq!(*seen.lock().unwrap(), [title]);
    }

    #[test]
    fn builder_requires_puzzle_and_frontend() {
        let err = Client::builder()
            .frontend(RecordingFrontend::default())
            .build()
            .err()
            .unwrap();
        assert!(err.to_string().contains("Puzzle is required"));

        let err = Client::builder()
            .puzzle(puzzle_content::bundled().unwrap())
            .build()
            .err()
            .unwrap();
        assert!(err.to_string().contains("Frontend is required"));
    }

    #[test]
    fn load_puzzle_prefers_configured_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(puzzle_content::BUNDLED_PUZZLE.as_bytes())
            .unwrap();

        let config = FrontendConfig {
            puzzle_file: Some(file.path().to_path_buf()),
            ..FrontendConfig::default()
        };
        assert_eq!(load_puzzle(&config).unwrap().words().len(), 11);

        let missing = FrontendConfig {
            puzzle_file: Some(file.path().with_extension("missing")),
            ..FrontendConfig::default()
        };
        assert!(load_puzzle(&missing).is_err());
    }
}
