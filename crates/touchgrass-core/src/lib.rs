//! Game state store, configuration, and session lifecycle for the
//! Touchgrass text adventure.
//!
//! The store is the only writer of the player's [`GameState`] and the
//! session's [`Grid`]. Every operation is total: out-of-range values are
//! clamped and impossible requests are no-ops, so nothing here returns an
//! error except configuration loading.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `touchgrass.yaml` into
//!   strongly-typed structs.
//! - [`outcome`] -- Win/loss evaluation observed after each command.
//! - [`session`] -- [`Session`] bundles a freshly generated grid with its
//!   store; restarting means starting a new session.
//! - [`store`] -- [`GameStore`] and its mutation operations.
//!
//! [`GameState`]: touchgrass_types::GameState
//! [`Grid`]: touchgrass_types::Grid
//! [`Session`]: session::Session
//! [`GameStore`]: store::GameStore

pub mod config;
pub mod outcome;
pub mod session;
pub mod store;

// Re-export primary types at crate root.
pub use config::{ConfigError, GameConfig};
pub use outcome::{LossCause, Outcome};
pub use session::Session;
pub use store::{GameStore, MoveOutcome};
