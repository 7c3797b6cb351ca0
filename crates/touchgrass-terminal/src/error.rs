//! Error types for the terminal binary.
//!
//! [`TerminalError`] is the top-level error type that wraps every failure
//! mode of the front end: loading configuration and talking to the
//! terminal. The game itself never fails.

/// Top-level error for the terminal binary.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: touchgrass_core::ConfigError,
    },

    /// Reading player input or writing game output failed.
    #[error("terminal I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
