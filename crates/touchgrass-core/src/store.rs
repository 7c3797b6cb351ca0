//! The game state store: sole owner and writer of a session's state.
//!
//! [`GameStore`] holds the player's [`GameState`] and the session's
//! [`Grid`]. Its operations are atomic and total. Deltas are clamped into
//! range, and requests that cannot apply (removing an item that is not
//! held, walking into the edge of the map) are silent no-ops. Nothing here
//! returns an error.
//!
//! # Movement
//!
//! A successful [`GameStore::move_player`] applies, in order:
//!
//! 1. Discover the destination room
//! 2. Pay the flat energy cost
//! 3. Advance the clock, draining energy per hour (doubled at night)
//! 4. Roll for phone battery drain
//! 5. Update the position and the move counter
//!
//! A move that would leave the grid changes nothing at all.

use std::collections::BTreeSet;

use touchgrass_types::{Direction, EventId, GameState, Grid, ItemId, Position, Room};
use touchgrass_world::RandomSource;
use tracing::debug;

use crate::config::GameConfig;

/// Upper bound of the phone battery percentage.
pub const MAX_PHONE_CHARGE: u32 = 100;

/// Result of a [`GameStore::move_player`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player walked to the given position.
    Moved(Position),
    /// The grid edge was in the way; no state changed.
    Blocked,
}

/// Owns the mutable state of one game session.
#[derive(Debug, Clone)]
pub struct GameStore {
    state: GameState,
    grid: Grid,
    config: GameConfig,
}

impl GameStore {
    /// Create a store for a freshly generated grid.
    ///
    /// The player starts at the grid center holding only the configured
    /// starting item, with full energy, a low phone battery, and the clock
    /// at the configured starting hour.
    pub fn new(grid: Grid, config: &GameConfig) -> Self {
        let player = &config.player;
        let max_energy = player.max_energy.max(0.0);
        let phone_charge = player.starting_phone_charge.min(MAX_PHONE_CHARGE);
        let state = GameState {
            position: grid.center(),
            inventory: vec![ItemId::new(player.starting_item.as_str())],
            energy: max_energy,
            max_energy,
            phone_charge,
            moves: 0,
            time_of_day: player.starting_time.rem_euclid(24.0),
            events_resolved: BTreeSet::new(),
            needs_to_charge: phone_charge < player.low_charge_threshold,
        };
        Self::from_parts(state, grid, config)
    }

    /// Assemble a store from an explicit state and grid (tests, replays).
    pub fn from_parts(state: GameState, grid: Grid, config: &GameConfig) -> Self {
        Self {
            state,
            grid,
            config: config.clone(),
        }
    }

    /// The player's current state.
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// The session's grid.
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The rules this store was created with.
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The room at `position`, if it is on the grid.
    pub fn room_at(&self, position: Position) -> Option<&Room> {
        self.grid.room(position)
    }

    /// The room the player is standing in.
    pub fn current_room(&self) -> Option<&Room> {
        self.grid.room(self.state.position)
    }

    /// Move the player one cell in `direction`.
    ///
    /// Walking into the grid edge is free: the position, energy, clock, and
    /// move counter stay untouched and [`MoveOutcome::Blocked`] is returned.
    pub fn move_player(
        &mut self,
        direction: Direction,
        rng: &mut (impl RandomSource + ?Sized),
    ) -> MoveOutcome {
        let from = self.state.position;
        let to = from.step(direction, self.grid.width, self.grid.height);
        if to == from {
            debug!(?direction, position = %from, "Move blocked by grid edge");
            return MoveOutcome::Blocked;
        }

        let movement = self.config.movement.clone();
        self.discover_room(to);
        self.update_energy(-movement.energy_cost);
        self.advance_time(movement.hours_per_move);
        if rng.chance(movement.phone_drain_chance) {
            let drain = i32::try_from(movement.phone_drain).unwrap_or(i32::MAX);
            self.update_phone_charge(drain.saturating_neg());
        }

        self.state.position = to;
        self.state.moves = self.state.moves.saturating_add(1);

        debug!(
            ?direction,
            from = %from,
            to = %to,
            energy = self.state.energy,
            phone_charge = self.state.phone_charge,
            moves = self.state.moves,
            "Player moved"
        );
        MoveOutcome::Moved(to)
    }

    /// Append `item` to the inventory. Duplicates are allowed.
    pub fn add_to_inventory(&mut self, item: ItemId) {
        debug!(item = %item, "Item added to inventory");
        self.state.inventory.push(item);
    }

    /// Remove the first copy of `item` from the inventory.
    ///
    /// Returns `false` (and changes nothing) if the item is not held.
    pub fn remove_from_inventory(&mut self, item: &ItemId) -> bool {
        let Some(index) = self.state.inventory.iter().position(|held| held == item) else {
            return false;
        };
        self.state.inventory.remove(index);
        debug!(item = %item, "Item removed from inventory");
        true
    }

    /// Add `delta` to energy, clamped to `[0, max_energy]`.
    pub fn update_energy(&mut self, delta: f64) {
        let ceiling = self.state.max_energy.max(0.0);
        let updated = self.state.energy + delta;
        self.state.energy = if updated.is_nan() {
            0.0
        } else {
            updated.clamp(0.0, ceiling)
        };
    }

    /// Add `delta` to the phone charge, clamped to `[0, 100]`.
    ///
    /// Also recomputes [`GameState::needs_to_charge`].
    pub fn update_phone_charge(&mut self, delta: i32) {
        let updated = i64::from(self.state.phone_charge)
            .saturating_add(i64::from(delta))
            .clamp(0, i64::from(MAX_PHONE_CHARGE));
        self.state.phone_charge = u32::try_from(updated).unwrap_or(0);
        self.state.needs_to_charge =
            self.state.phone_charge < self.config.player.low_charge_threshold;
    }

    /// Record `event` as resolved. Idempotent.
    ///
    /// Matching events in the player's current room are flagged resolved
    /// as well. Returns `true` if the event was not resolved before.
    pub fn resolve_event(&mut self, event: &EventId) -> bool {
        let position = self.state.position;
        if let Some(room) = self.grid.room_mut(position) {
            for attached in room.events.iter_mut().filter(|e| &e.id == event) {
                attached.resolved = true;
            }
        }
        let newly = self.state.events_resolved.insert(event.clone());
        if newly {
            debug!(event = %event, position = %position, "Event resolved");
        }
        newly
    }

    /// Advance the clock by `hours`, wrapping at 24.
    ///
    /// Energy drains at the configured hourly rate, doubled when the new
    /// time falls in the night window.
    pub fn advance_time(&mut self, hours: f64) {
        let time = (self.state.time_of_day + hours).rem_euclid(24.0);
        self.state.time_of_day = if time.is_finite() { time } else { 0.0 };
        let drain = hours * self.config.clock.drain_rate(self.state.time_of_day);
        self.update_energy(-drain);
    }

    /// Mark the room at `position` as discovered. Idempotent.
    pub fn discover_room(&mut self, position: Position) {
        let Some(room) = self.grid.room_mut(position) else {
            return;
        };
        if !room.discovered {
            room.discovered = true;
            debug!(position = %position, room = %room.name, "Room discovered");
        }
    }

    /// Remove one copy of `item` from the current room.
    ///
    /// Returns `false` if the item is not lying here.
    pub fn take_room_item(&mut self, item: &ItemId) -> bool {
        let position = self.state.position;
        self.grid
            .room_mut(position)
            .is_some_and(|room| room.remove_item(item))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use touchgrass_types::{EventKind, GameEvent, RoomType};
    use touchgrass_world::{ScriptedRandom, generate};

    use super::*;

    /// Draws that never trigger a probabilistic effect.
    fn calm() -> ScriptedRandom {
        ScriptedRandom::constant(0.99)
    }

    fn store() -> GameStore {
        let grid = generate(16, 16, &mut ScriptedRandom::constant(0.0));
        GameStore::new(grid, &GameConfig::default())
    }

    fn store_at(position: Position, time_of_day: f64) -> GameStore {
        let mut store = store();
        store.state.position = position;
        store.state.time_of_day = time_of_day;
        store
    }

    #[test]
    fn initial_state() {
        let store = store();
        let state = store.state();
        assert_eq!(state.position, Position::new(8, 8));
        assert_eq!(state.inventory, vec![ItemId::from("phone")]);
        assert_eq!(state.energy, 100.0);
        assert_eq!(state.max_energy, 100.0);
        assert_eq!(state.phone_charge, 12);
        assert_eq!(state.moves, 0);
        assert_eq!(state.time_of_day, 23.0);
        assert!(state.events_resolved.is_empty());
        assert!(state.needs_to_charge);
        assert_eq!(
            store.current_room().map(|room| room.room_type),
            Some(RoomType::Campsite)
        );
    }

    #[test]
    fn edge_moves_are_free() {
        for (position, direction) in [
            (Position::new(5, 0), Direction::North),
            (Position::new(5, 15), Direction::South),
            (Position::new(0, 5), Direction::West),
            (Position::new(15, 5), Direction::East),
        ] {
            let mut store = store_at(position, 12.0);
            let before = store.state().clone();
            let outcome = store.move_player(direction, &mut ScriptedRandom::constant(0.0));
            assert_eq!(outcome, MoveOutcome::Blocked);
            assert_eq!(store.state(), &before);
        }
    }

    #[test]
    fn daytime_move_costs_energy_and_time() {
        let mut store = store_at(Position::new(4, 4), 12.0);
        let outcome = store.move_player(Direction::East, &mut calm());
        assert_eq!(outcome, MoveOutcome::Moved(Position::new(5, 4)));
        let state = store.state();
        assert_eq!(state.position, Position::new(5, 4));
        assert_eq!(state.moves, 1);
        // 5 for the move plus 0.25 hours at 1 per hour.
        assert_eq!(state.energy, 94.75);
        assert_eq!(state.time_of_day, 12.25);
        assert_eq!(state.phone_charge, 12);
        assert!(store.room_at(Position::new(5, 4)).is_some_and(|r| r.discovered));
    }

    #[test]
    fn night_move_drains_double() {
        let mut store = store();
        store.move_player(Direction::North, &mut calm());
        // 5 for the move plus 0.25 hours at 2 per hour.
        assert_eq!(store.state().energy, 94.5);
        assert_eq!(store.state().time_of_day, 23.25);
    }

    #[test]
    fn moves_stay_in_bounds() {
        let mut store = store();
        let mut rng = calm();
        for direction in [Direction::North, Direction::West, Direction::South, Direction::East] {
            for _ in 0..20 {
                store.update_energy(100.0);
                store.move_player(direction, &mut rng);
                let position = store.state().position;
                assert!(position.x < 16 && position.y < 16);
            }
        }
    }

    #[test]
    fn phone_drains_on_low_roll() {
        let mut store = store_at(Position::new(4, 4), 12.0);
        store.move_player(Direction::South, &mut ScriptedRandom::constant(0.05));
        assert_eq!(store.state().phone_charge, 11);
    }

    #[test]
    fn energy_is_clamped() {
        let mut store = store();
        store.update_energy(1_000.0);
        assert_eq!(store.state().energy, 100.0);
        store.update_energy(-1_000_000.0);
        assert_eq!(store.state().energy, 0.0);
        store.update_energy(f64::NAN);
        assert_eq!(store.state().energy, 0.0);
        store.update_energy(42.5);
        assert_eq!(store.state().energy, 42.5);
    }

    #[test]
    fn moving_at_zero_energy_stays_at_zero() {
        let mut store = store_at(Position::new(4, 4), 23.0);
        store.update_energy(-100.0);
        store.move_player(Direction::East, &mut calm());
        assert_eq!(store.state().energy, 0.0);
        assert_eq!(store.state().moves, 1);
    }

    #[test]
    fn phone_charge_is_clamped_and_flagged() {
        let mut store = store();
        store.update_phone_charge(i32::MAX);
        assert_eq!(store.state().phone_charge, 100);
        assert!(!store.state().needs_to_charge);
        store.update_phone_charge(-81);
        assert_eq!(store.state().phone_charge, 19);
        assert!(store.state().needs_to_charge);
        store.update_phone_charge(i32::MIN);
        assert_eq!(store.state().phone_charge, 0);
        assert!(store.state().needs_to_charge);
        store.update_phone_charge(20);
        assert!(!store.state().needs_to_charge);
    }

    #[test]
    fn inventory_add_and_remove_first_match() {
        let mut store = store();
        let snacks = ItemId::from("snacks");
        store.add_to_inventory(snacks.clone());
        store.add_to_inventory(snacks.clone());
        assert_eq!(store.state().inventory.len(), 3);
        assert!(store.remove_from_inventory(&snacks));
        assert_eq!(
            store.state().inventory,
            vec![ItemId::from("phone"), snacks.clone()]
        );
        assert!(!store.remove_from_inventory(&ItemId::from("compass")));
        assert_eq!(store.state().inventory.len(), 2);
    }

    #[test]
    fn resolve_event_is_idempotent() {
        let mut store = store();
        let bear = EventId::from("bear_encounter");
        assert!(store.resolve_event(&bear));
        assert!(!store.resolve_event(&bear));
        assert_eq!(store.state().events_resolved.len(), 1);
        assert!(store.state().events_resolved.contains(&bear));
    }

    #[test]
    fn resolve_event_flags_current_room() {
        let mut store = store_at(Position::new(8, 1), 12.0);
        assert!(store.current_room().is_some_and(|room| room
            .events
            .iter()
            .any(|e| e.id == "creek_crossing" && !e.resolved)));
        store.resolve_event(&EventId::from("creek_crossing"));
        assert!(store.current_room().is_some_and(|room| room
            .events
            .iter()
            .all(|e: &GameEvent| e.resolved && e.kind == EventKind::Obstacle)));
    }

    #[test]
    fn time_wraps_past_midnight() {
        let mut store = store();
        store.advance_time(1.5);
        assert_eq!(store.state().time_of_day, 0.5);
        // 1.5 hours at the night rate.
        assert_eq!(store.state().energy, 97.0);
        store.advance_time(48.0);
        assert_eq!(store.state().time_of_day, 0.5);
    }

    #[test]
    fn discover_room_is_idempotent() {
        let mut store = store();
        let target = Position::new(2, 3);
        store.discover_room(target);
        store.discover_room(target);
        assert!(store.room_at(target).is_some_and(|room| room.discovered));
        store.discover_room(Position::new(99, 99));
    }

    #[test]
    fn take_room_item_removes_one_copy() {
        let mut store = store();
        let position = store.state().position;
        let drink = ItemId::from("energy_drink");
        if let Some(room) = store.grid.room_mut(position) {
            room.items = vec![drink.clone(), drink.clone()];
        }
        assert!(store.take_room_item(&drink));
        assert_eq!(store.current_room().map(|room| room.items.len()), Some(1));
        assert!(store.take_room_item(&drink));
        assert!(!store.take_room_item(&drink));
    }
}
