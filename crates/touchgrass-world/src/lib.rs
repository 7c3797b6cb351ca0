//! Item catalog, room content, and grid generation for the Touchgrass
//! text adventure.
//!
//! This crate models the static world: which items and obstacles exist,
//! what each room type looks like, and how a fresh grid of rooms is laid
//! out at session start. It never touches the player's state.
//!
//! # Modules
//!
//! - [`catalog`] -- Read-only item and obstacle definitions plus per-room
//!   spawn pools.
//! - [`descriptions`] -- Description pools and examine tables per room type.
//! - [`generator`] -- [`generate`] builds a [`Grid`] from a width, a height,
//!   and a random source.
//! - [`random`] -- The [`RandomSource`] seam and [`ScriptedRandom`] for
//!   deterministic tests.
//!
//! [`Grid`]: touchgrass_types::Grid
//! [`generate`]: generator::generate
//! [`RandomSource`]: random::RandomSource
//! [`ScriptedRandom`]: random::ScriptedRandom

pub mod catalog;
pub mod descriptions;
pub mod generator;
pub mod random;

// Re-export primary types at crate root.
pub use catalog::{ItemDef, ObstacleDef, ObstacleKind, UseEffect};
pub use generator::{SpecialLocation, generate, special_locations};
pub use random::{RandomSource, ScriptedRandom};
