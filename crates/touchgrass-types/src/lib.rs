//! Shared type definitions for the Touchgrass text adventure.
//!
//! This crate is the single source of truth for the data model shared by
//! the world generator, the game state store, and the command interpreter.
//! Types defined here also flow downstream to `TypeScript` via `ts-rs`, so a
//! web front end can render the same state the terminal does.
//!
//! # Modules
//!
//! - [`ids`] -- Opaque string identifiers for items and events
//! - [`enums`] -- Directions, room types, and event classifications
//! - [`structs`] -- Positions, rooms, the grid, events, and player state

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{Direction, EventKind, RoomType};
pub use ids::{EventId, ItemId};
pub use structs::{GameEvent, GameState, Grid, Position, Room};
