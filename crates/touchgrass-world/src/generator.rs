//! Grid generation: fills a `width x height` grid with rooms.
//!
//! Generation runs in two passes:
//!
//! 1. Every cell becomes a forest room with a random description from the
//!    forest pool, the filler examine table, and zero or one random items.
//! 2. A fixed list of special locations (see [`special_locations`]) replaces
//!    cells wholesale with rooms of their own type, each with the landmark
//!    examine table and any scripted events the type calls for.
//!
//! Random draws happen per room in this order: description, item count,
//! item choice (only when one item spawns and the pool is non-empty), and
//! finally the event roll (only for types with a probabilistic event).
//! Scripted random sources in tests rely on that order.

use std::collections::BTreeMap;

use touchgrass_types::{GameEvent, Grid, ItemId, Position, Room, RoomType};
use tracing::debug;

use crate::catalog::{self, ObstacleKind};
use crate::descriptions;
use crate::random::{RandomSource, choose};

/// Probability that a dense forest room hides a dark trail.
pub const DARK_TRAIL_CHANCE: f64 = 0.3;

/// A fixed placement applied after the forest fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialLocation {
    /// Cell to override.
    pub position: Position,
    /// Room type placed there.
    pub room_type: RoomType,
}

/// The special placements for a `width x height` grid, in application order.
///
/// Offsets assume a grid of at least 4x4; smaller grids saturate to the
/// edges and may stack several placements on one cell, the last one winning.
pub fn special_locations(width: u32, height: u32) -> Vec<SpecialLocation> {
    let at = |x: u32, y: u32, room_type: RoomType| SpecialLocation {
        position: Position::new(x, y),
        room_type,
    };
    vec![
        at(width / 2, height / 2, RoomType::Campsite),
        at(width.saturating_sub(2), height.saturating_sub(2), RoomType::Road),
        at(width.saturating_sub(3), height.saturating_sub(3), RoomType::ParkingLot),
        at(1, height / 2, RoomType::RangerPost),
        at(width / 2, 1, RoomType::Creek),
        at(width.saturating_sub(2), 1, RoomType::BearArea),
        at(width.saturating_sub(4), height.saturating_sub(4), RoomType::Cabin),
    ]
}

/// Build a fresh grid of `width x height` rooms.
///
/// Generation always succeeds. Grids smaller than the special-location
/// offsets get undefined (but in-bounds) placements.
pub fn generate(width: u32, height: u32, rng: &mut (impl RandomSource + ?Sized)) -> Grid {
    let mut grid = Grid::new(width, height);

    for x in 0..width {
        for y in 0..height {
            let room = build_room(RoomType::Forest, descriptions::filler_examine(), rng);
            grid.insert(Position::new(x, y), room);
        }
    }

    let mut events_attached: usize = 0;
    for special in special_locations(width, height) {
        let mut room = build_room(special.room_type, descriptions::landmark_examine(), rng);
        room.events = events_for(special.room_type, rng);
        events_attached = events_attached.saturating_add(room.events.len());
        grid.insert(special.position, room);
    }

    debug!(
        width,
        height,
        rooms = grid.rooms.len(),
        events_attached,
        "Grid generated"
    );

    grid
}

/// Scripted events for a room of the given type.
///
/// | Room type     | Event                              |
/// |---------------|------------------------------------|
/// | `bear_area`   | bear encounter                     |
/// | `ranger_post` | ranger patrol                      |
/// | `creek`       | creek crossing                     |
/// | `dense_forest`| dark trail, with 30% probability   |
///
/// No special location is a dense forest today, so the dark-trail roll only
/// fires once such a placement is added.
pub fn events_for(room_type: RoomType, rng: &mut (impl RandomSource + ?Sized)) -> Vec<GameEvent> {
    let kind = match room_type {
        RoomType::BearArea => Some(ObstacleKind::Bear),
        RoomType::RangerPost => Some(ObstacleKind::Ranger),
        RoomType::Creek => Some(ObstacleKind::Creek),
        RoomType::DenseForest => rng
            .chance(DARK_TRAIL_CHANCE)
            .then_some(ObstacleKind::DarkTrail),
        _ => None,
    };

    kind.and_then(catalog::obstacle)
        .map(catalog::ObstacleDef::instantiate)
        .into_iter()
        .collect()
}

fn build_room(
    room_type: RoomType,
    examine: BTreeMap<String, String>,
    rng: &mut (impl RandomSource + ?Sized),
) -> Room {
    let description = choose(rng, descriptions::pool(room_type))
        .copied()
        .unwrap_or_default()
        .to_owned();

    Room {
        name: room_type.display_name(),
        description,
        room_type,
        items: random_items(room_type, rng),
        examine,
        discovered: false,
        events: Vec::new(),
    }
}

/// Zero or one item drawn from the room type's spawn pool.
fn random_items(room_type: RoomType, rng: &mut (impl RandomSource + ?Sized)) -> Vec<ItemId> {
    let count = rng.index(2).unwrap_or(0);
    if count == 0 {
        return Vec::new();
    }
    choose(rng, catalog::spawn_pool(room_type))
        .map(|&key| ItemId::from(key))
        .into_iter()
        .collect()
}
