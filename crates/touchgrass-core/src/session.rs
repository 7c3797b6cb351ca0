//! Session lifecycle: one generated grid plus the store that plays on it.
//!
//! A session is disposable. Restarting a game drops the old session and
//! starts a new one, which regenerates the grid and resets the state.

use touchgrass_types::ItemId;
use touchgrass_world::{RandomSource, generate};
use tracing::info;

use crate::config::GameConfig;
use crate::outcome::Outcome;
use crate::store::GameStore;

/// One playthrough of the game.
#[derive(Debug, Clone)]
pub struct Session {
    store: GameStore,
    win_item: ItemId,
}

impl Session {
    /// Generate a grid and set up a new game on it.
    pub fn start(config: &GameConfig, rng: &mut (impl RandomSource + ?Sized)) -> Self {
        let grid = generate(config.grid.width, config.grid.height, rng);
        let store = GameStore::new(grid, config);
        let state = store.state();
        info!(
            width = config.grid.width,
            height = config.grid.height,
            position = %state.position,
            energy = state.energy,
            phone_charge = state.phone_charge,
            "Session started"
        );
        Self::from_store(store)
    }

    /// Wrap an existing store, taking the win item from its config.
    pub fn from_store(store: GameStore) -> Self {
        let win_item = ItemId::new(store.config().player.win_item.as_str());
        Self { store, win_item }
    }

    /// Read access to the store.
    pub const fn store(&self) -> &GameStore {
        &self.store
    }

    /// Write access to the store, for the interpreter.
    pub const fn store_mut(&mut self) -> &mut GameStore {
        &mut self.store
    }

    /// The item that wins the game when carried onto the road.
    pub const fn win_item(&self) -> &ItemId {
        &self.win_item
    }

    /// Evaluate the current win/loss status.
    pub fn outcome(&self) -> Outcome {
        Outcome::evaluate(self.store.state(), self.store.grid(), &self.win_item)
    }
}
