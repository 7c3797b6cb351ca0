//! Enumeration types for the Touchgrass text adventure.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Movement
// ---------------------------------------------------------------------------

/// One of the four compass directions the player can walk.
///
/// North decreases `y`, south increases it; west decreases `x`, east
/// increases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Direction {
    /// Towards `y = 0`.
    North,
    /// Towards `y = height - 1`.
    South,
    /// Towards `x = width - 1`.
    East,
    /// Towards `x = 0`.
    West,
}

impl Direction {
    /// All four directions in the order exits are listed.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::West, Self::East];

    /// Parse a direction word or its one-letter abbreviation.
    ///
    /// Matching is case-insensitive; anything else yields `None`.
    pub fn from_word(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            _ => None,
        }
    }

    /// Capitalized label used when listing exits.
    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        }
    }
}

// ---------------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------------

/// The kind of terrain a room represents.
///
/// The type selects the room's description pool, its spawnable item pool,
/// and which scripted events the generator attaches to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum RoomType {
    /// Starting area.
    Campsite,
    /// Default filler terrain.
    Forest,
    /// Thick woods, may hide a dark trail.
    DenseForest,
    /// Open ground.
    Clearing,
    /// A hiking path.
    Trail,
    /// Running water that has to be crossed.
    Creek,
    /// Park ranger station.
    RangerPost,
    /// Cars, one of which might be unlocked by the keys.
    ParkingLot,
    /// A cabin that may hold supplies.
    Cabin,
    /// A cave mouth.
    Cave,
    /// Bear territory.
    BearArea,
    /// Paved road, the way home.
    Road,
}

impl RoomType {
    /// The snake-case key of this room type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Campsite => "campsite",
            Self::Forest => "forest",
            Self::DenseForest => "dense_forest",
            Self::Clearing => "clearing",
            Self::Trail => "trail",
            Self::Creek => "creek",
            Self::RangerPost => "ranger_post",
            Self::ParkingLot => "parking_lot",
            Self::Cabin => "cabin",
            Self::Cave => "cave",
            Self::BearArea => "bear_area",
            Self::Road => "road",
        }
    }

    /// Human-readable room name derived from the key.
    ///
    /// The first letter is upper-cased and the first underscore becomes a
    /// space, so `ranger_post` renders as `Ranger post`.
    pub fn display_name(self) -> String {
        let spaced = self.as_str().replacen('_', " ", 1);
        let mut chars = spaced.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }
}

impl core::fmt::Display for RoomType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Classification of a scripted room event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum EventKind {
    /// Something (or someone) the player runs into.
    Encounter,
    /// Terrain that needs the right gear to get past.
    Obstacle,
    /// A find that rewards exploration.
    Discovery,
}
