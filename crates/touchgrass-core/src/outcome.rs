//! Win/loss evaluation.
//!
//! The outcome is a pure function of the state: it is observed after every
//! command, never stored. Loss conditions are checked before the win
//! condition, so reaching the road on the last point of energy still loses.

use std::fmt;

use touchgrass_types::{GameState, Grid, ItemId, RoomType};

/// Why a game ended in defeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossCause {
    /// Energy reached zero.
    Exhausted,
    /// The phone battery reached zero.
    PhoneDead,
}

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player can keep issuing commands.
    InProgress,
    /// The player reached the road holding the car keys.
    Won,
    /// The player ran out of something.
    Lost(LossCause),
}

impl Outcome {
    /// Evaluate the state against the win and loss conditions.
    ///
    /// In order: energy at zero loses, phone at zero loses, standing on a
    /// road with `win_item` wins, otherwise the game goes on.
    pub fn evaluate(state: &GameState, grid: &Grid, win_item: &ItemId) -> Self {
        if state.energy <= 0.0 {
            return Self::Lost(LossCause::Exhausted);
        }
        if state.phone_charge == 0 {
            return Self::Lost(LossCause::PhoneDead);
        }
        let on_road = grid
            .room(state.position)
            .is_some_and(|room| room.room_type == RoomType::Road);
        if on_road && state.has_item(win_item) {
            return Self::Won;
        }
        Self::InProgress
    }

    /// Whether the game has ended either way.
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => f.write_str("in_progress"),
            Self::Won => f.write_str("won"),
            Self::Lost(LossCause::Exhausted) => f.write_str("lost_exhausted"),
            Self::Lost(LossCause::PhoneDead) => f.write_str("lost_phone_dead"),
        }
    }
}

#[cfg(test)]
mod tests {
    use touchgrass_types::Position;
    use touchgrass_world::{ScriptedRandom, generate};

    use super::*;
    use crate::config::GameConfig;
    use crate::store::GameStore;

    fn fresh() -> (GameState, Grid) {
        let grid = generate(16, 16, &mut ScriptedRandom::constant(0.0));
        let store = GameStore::new(grid, &GameConfig::default());
        (store.state().clone(), store.grid().clone())
    }

    fn keys() -> ItemId {
        ItemId::from("car_keys")
    }

    #[test]
    fn fresh_game_is_in_progress() {
        let (state, grid) = fresh();
        let outcome = Outcome::evaluate(&state, &grid, &keys());
        assert_eq!(outcome, Outcome::InProgress);
        assert!(!outcome.is_over());
    }

    #[test]
    fn road_with_keys_wins() {
        let (mut state, grid) = fresh();
        state.position = Position::new(14, 14);
        assert_eq!(Outcome::evaluate(&state, &grid, &keys()), Outcome::InProgress);
        state.inventory.push(keys());
        assert_eq!(Outcome::evaluate(&state, &grid, &keys()), Outcome::Won);
    }

    #[test]
    fn keys_off_road_do_not_win() {
        let (mut state, grid) = fresh();
        state.inventory.push(keys());
        assert_eq!(Outcome::evaluate(&state, &grid, &keys()), Outcome::InProgress);
    }

    #[test]
    fn losses_take_precedence() {
        let (mut state, grid) = fresh();
        state.position = Position::new(14, 14);
        state.inventory.push(keys());
        state.phone_charge = 0;
        assert_eq!(
            Outcome::evaluate(&state, &grid, &keys()),
            Outcome::Lost(LossCause::PhoneDead)
        );
        state.energy = 0.0;
        let outcome = Outcome::evaluate(&state, &grid, &keys());
        assert_eq!(outcome, Outcome::Lost(LossCause::Exhausted));
        assert!(outcome.is_over());
        assert_eq!(outcome.to_string(), "lost_exhausted");
    }
}
