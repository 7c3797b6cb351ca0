//! Core entity structs: positions, rooms, the grid, events, and player state.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Direction, EventKind, RoomType};
use crate::ids::{EventId, ItemId};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A cell coordinate on the grid, bounded by `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Position {
    /// Column, growing eastwards.
    pub x: u32,
    /// Row, growing southwards.
    pub y: u32,
}

impl Position {
    /// Create a position from its coordinates.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The composite `"x,y"` key used to address rooms.
    pub fn key(self) -> String {
        format!("{},{}", self.x, self.y)
    }

    /// Step one cell in `direction`, clamped to a `width x height` grid.
    ///
    /// At an edge the returned position equals `self`.
    pub fn step(self, direction: Direction, width: u32, height: u32) -> Self {
        let max_x = width.saturating_sub(1);
        let max_y = height.saturating_sub(1);
        match direction {
            Direction::North => Self::new(self.x, self.y.saturating_sub(1)),
            Direction::South => Self::new(self.x, self.y.saturating_add(1).min(max_y)),
            Direction::West => Self::new(self.x.saturating_sub(1), self.y),
            Direction::East => Self::new(self.x.saturating_add(1).min(max_x), self.y),
        }
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// A scripted encounter or obstacle attached to a room.
///
/// Instances are built from the obstacle catalog at generation time and
/// resolved by holding every item in `requires`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GameEvent {
    /// Stable identifier, shared by every instance of the same obstacle.
    pub id: EventId,
    /// Encounter, obstacle, or discovery.
    pub kind: EventKind,
    /// Text shown when the player meets the event.
    pub description: String,
    /// Whether the event has been dealt with in this room.
    pub resolved: bool,
    /// Items the player must hold to resolve the event.
    #[serde(default)]
    pub requires: Vec<ItemId>,
    /// Items granted when the event is resolved.
    #[serde(default)]
    pub rewards: Vec<ItemId>,
}

// ---------------------------------------------------------------------------
// Rooms and the grid
// ---------------------------------------------------------------------------

/// A single grid cell's narrative and interactive content.
///
/// Item lists and the discovered flag belong to this instance only; taking
/// an item here never touches the catalog it was drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Room {
    /// Display name, derived from the room type.
    pub name: String,
    /// The description chosen for this room at generation time.
    pub description: String,
    /// Terrain kind.
    #[serde(rename = "type")]
    pub room_type: RoomType,
    /// Items lying here, in spawn order. Duplicates are allowed.
    pub items: Vec<ItemId>,
    /// Examine keyword to description text.
    pub examine: BTreeMap<String, String>,
    /// Set on the player's first visit.
    pub discovered: bool,
    /// Scripted events attached at generation time.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<GameEvent>,
}

impl Room {
    /// Whether at least one copy of `item` lies in this room.
    pub fn has_item(&self, item: &ItemId) -> bool {
        self.items.contains(item)
    }

    /// Remove one copy of `item` from the room. Returns `false` if absent.
    pub fn remove_item(&mut self, item: &ItemId) -> bool {
        let Some(index) = self.items.iter().position(|held| held == item) else {
            return false;
        };
        self.items.remove(index);
        true
    }
}

/// The full set of rooms addressed by `(x, y)`.
///
/// Created once at session start. Rooms are never added or removed
/// afterwards, only mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Grid {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    /// Rooms keyed by [`Position::key`].
    pub rooms: BTreeMap<String, Room>,
}

impl Grid {
    /// Create an empty grid of the given dimensions.
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rooms: BTreeMap::new(),
        }
    }

    /// The center cell, where the player starts.
    pub const fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    /// Whether `position` lies inside the grid bounds.
    pub const fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    /// Place (or replace) the room at `position`.
    pub fn insert(&mut self, position: Position, room: Room) {
        self.rooms.insert(position.key(), room);
    }

    /// Look up the room at `position`.
    pub fn room(&self, position: Position) -> Option<&Room> {
        self.rooms.get(&position.key())
    }

    /// Look up the room at `position` for mutation.
    pub fn room_mut(&mut self, position: Position) -> Option<&mut Room> {
        self.rooms.get_mut(&position.key())
    }

    /// Directions that stay in bounds from `position`.
    ///
    /// North needs `y > 0`, south `y < height - 1`, west `x > 0`, and
    /// east `x < width - 1`. Listed in [`Direction::ALL`] order.
    pub fn exits(&self, position: Position) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| position.step(dir, self.width, self.height) != position)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Player state
// ---------------------------------------------------------------------------

/// The mutable player/world session state.
///
/// Only the game state store writes to this struct. `energy` stays within
/// `[0, max_energy]`, `phone_charge` within `[0, 100]`, `moves` never
/// decreases, and `time_of_day` stays within `[0, 24)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GameState {
    /// Current cell.
    pub position: Position,
    /// Held items in pickup order. Duplicates are allowed.
    pub inventory: Vec<ItemId>,
    /// Remaining stamina.
    pub energy: f64,
    /// Stamina ceiling.
    pub max_energy: f64,
    /// Phone battery percentage.
    pub phone_charge: u32,
    /// Successful moves made so far.
    pub moves: u32,
    /// Hour of the day as a real number in `[0, 24)`.
    pub time_of_day: f64,
    /// Events the player has resolved.
    pub events_resolved: BTreeSet<EventId>,
    /// Derived: the phone charge is below the low-battery threshold.
    pub needs_to_charge: bool,
}

impl GameState {
    /// Whether the inventory holds at least one copy of `item`.
    pub fn has_item(&self, item: &ItemId) -> bool {
        self.inventory.contains(item)
    }

    /// Time of day formatted as `H:MM`.
    ///
    /// The hour is not padded; minutes are the fractional hour times 60,
    /// rounded down and zero-padded.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn clock_label(&self) -> String {
        let time = self.time_of_day.rem_euclid(24.0);
        // Both values are non-negative and below 24 / 60 respectively.
        let hour = time.floor() as u32;
        let minute = (time.fract() * 60.0).floor() as u32;
        format!("{hour}:{minute:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest_room(items: &[&str]) -> Room {
        Room {
            name: String::from("Forest"),
            description: String::from("Trees."),
            room_type: RoomType::Forest,
            items: items.iter().map(|&i| ItemId::from(i)).collect(),
            examine: BTreeMap::new(),
            discovered: false,
            events: Vec::new(),
        }
    }

    fn state_at(time_of_day: f64) -> GameState {
        GameState {
            position: Position::new(8, 8),
            inventory: vec![ItemId::from("phone")],
            energy: 100.0,
            max_energy: 100.0,
            phone_charge: 12,
            moves: 0,
            time_of_day,
            events_resolved: BTreeSet::new(),
            needs_to_charge: true,
        }
    }

    #[test]
    fn position_key_format() {
        assert_eq!(Position::new(3, 11).key(), "3,11");
    }

    #[test]
    fn step_clamps_at_edges() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(Direction::North, 4, 4), corner);
        assert_eq!(corner.step(Direction::West, 4, 4), corner);
        assert_eq!(corner.step(Direction::South, 4, 4), Position::new(0, 1));

        let far = Position::new(3, 3);
        assert_eq!(far.step(Direction::East, 4, 4), far);
        assert_eq!(far.step(Direction::South, 4, 4), far);
        assert_eq!(far.step(Direction::West, 4, 4), Position::new(2, 3));
    }

    #[test]
    fn exits_depend_on_bounds() {
        let grid = Grid::new(4, 4);
        assert_eq!(
            grid.exits(Position::new(0, 0)),
            vec![Direction::South, Direction::East]
        );
        assert_eq!(grid.exits(Position::new(2, 2)), Direction::ALL.to_vec());
        assert_eq!(
            grid.exits(Position::new(3, 3)),
            vec![Direction::North, Direction::West]
        );
    }

    #[test]
    fn remove_item_takes_exactly_one() {
        let mut room = forest_room(&["snacks", "snacks", "compass"]);
        assert!(room.remove_item(&ItemId::from("snacks")));
        assert_eq!(room.items.len(), 2);
        assert!(room.has_item(&ItemId::from("snacks")));
        assert!(!room.remove_item(&ItemId::from("flashlight")));
        assert_eq!(room.items.len(), 2);
    }

    #[test]
    fn grid_lookup_by_position() {
        let mut grid = Grid::new(2, 2);
        grid.insert(Position::new(1, 0), forest_room(&[]));
        assert!(grid.room(Position::new(1, 0)).is_some());
        assert!(grid.room(Position::new(0, 1)).is_none());
        assert_eq!(grid.center(), Position::new(1, 1));
    }

    #[test]
    fn clock_label_pads_minutes() {
        assert_eq!(state_at(23.0).clock_label(), "23:00");
        assert_eq!(state_at(23.25).clock_label(), "23:15");
        assert_eq!(state_at(0.5).clock_label(), "0:30");
        assert_eq!(state_at(9.75).clock_label(), "9:45");
    }

    #[test]
    fn room_type_field_serializes_as_type() {
        let json = serde_json::to_value(forest_room(&[])).ok();
        let kind = json.as_ref().and_then(|v| v.get("type")).and_then(|v| v.as_str());
        assert_eq!(kind, Some("forest"));
    }
}
