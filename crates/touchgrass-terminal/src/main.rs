//! Terminal front end for the Touchgrass text adventure.
//!
//! Reads commands from stdin one line at a time, prints the interpreter's
//! replies to stdout, and announces wins and losses. Logs go to stderr so
//! they never interleave with the story.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `touchgrass.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Run the read-eval-print loop until end of input or `quit`

mod error;
mod repl;

use std::io;
use std::path::Path;

use touchgrass_core::GameConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::TerminalError;

/// Configuration file looked up in the working directory.
const CONFIG_FILE: &str = "touchgrass.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration file is unreadable or malformed,
/// or if stdin/stdout fail.
fn main() -> Result<(), TerminalError> {
    // 1. Load configuration.
    let config_path = Path::new(CONFIG_FILE);
    let from_file = config_path.exists();
    let config = if from_file {
        GameConfig::from_file(config_path)?
    } else {
        GameConfig::default()
    };

    // 2. Initialize structured logging.
    let level = config.logging.level.clone();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    info!(
        from_file,
        width = config.grid.width,
        height = config.grid.height,
        narrate_obstacles = config.interpreter.narrate_obstacles,
        "Configuration loaded"
    );

    // 3. Play.
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&config, &mut rand::rng(), stdin.lock(), &mut stdout.lock())?;

    info!("touchgrass exiting");
    Ok(())
}
