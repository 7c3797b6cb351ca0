//! Free-text command interpreter for the Touchgrass text adventure.
//!
//! Turns one line of player input into one reply string, mutating the
//! session through the [`GameStore`] along the way. The interpreter never
//! fails: empty, malformed, or unknown input gets a guidance message back.
//! Win/loss detection is left to the caller (see
//! [`Session::outcome`](touchgrass_core::Session::outcome)).
//!
//! # Modules
//!
//! - [`command`] -- Parsing raw input into a typed [`Command`].
//! - [`flavor`] -- Fixed reply texts and the complaint pool.
//! - [`interpreter`] -- Command handlers and the [`interpret`] entry point.
//!
//! [`GameStore`]: touchgrass_core::GameStore
//! [`Command`]: command::Command
//! [`interpret`]: interpreter::interpret

pub mod command;
pub mod flavor;
pub mod interpreter;

pub use command::Command;
pub use interpreter::{execute, interpret};
