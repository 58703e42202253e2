//! Crossword client binary.
//!
//! Composition root: loads `.env`, configuration, logging and the puzzle,
//! then hands control to the selected frontend.
//!
//! # Examples
//!
//! ```bash
//! # Bundled puzzle
//! cargo run -p crossword-client
//!
//! # Custom puzzle file
//! CROSSWORD_PUZZLE_FILE=my_puzzle.ron cargo run -p crossword-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use crossword_client::{Client, load_puzzle};

    // 1. Load configuration from environment
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();
    let session_id = std::env::var("CROSSWORD_SESSION_ID").ok();

    // 2. Setup logging
    logging::setup_logging(session_id.as_deref())?;

    tracing::info!("Starting crossword client");

    // 3. Load and validate the puzzle before touching the terminal
    let puzzle = load_puzzle(&frontend_config)?;
    tracing::info!(
        title = puzzle.title(),
        words = puzzle.words().len(),
        cells = puzzle.index().active_count(),
        "Puzzle loaded"
    );

    // 4. Build and run
    let client = Client::builder()
        .puzzle(puzzle)
        .frontend(CliFrontend::new(frontend_config, cli_config))
        .build()?;

    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
