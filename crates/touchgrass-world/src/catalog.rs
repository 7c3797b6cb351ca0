//! Static registry of item and obstacle definitions.
//!
//! The catalog is the single source of truth for which item and event
//! identifiers exist and what they do. Everything here is read-only at
//! runtime; rooms and inventories hold [`ItemId`]s that are resolved
//! against these tables when text has to be rendered or an item is used.

use touchgrass_types::{EventId, EventKind, GameEvent, ItemId, RoomType};

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// What happens when the player uses an item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UseEffect {
    /// Restore energy and consume the item.
    Restore {
        /// Energy added (clamped by the store).
        energy: f64,
        /// Reply shown after consuming the item.
        message: &'static str,
    },
    /// Charge the phone, provided another item is also held.
    Charge {
        /// Phone charge added (clamped by the store).
        amount: i32,
        /// Item that must be held for the charge to work.
        requires: &'static str,
        /// Reply shown after charging.
        message: &'static str,
        /// Reply shown when the required item is missing.
        refusal: &'static str,
    },
    /// No state change; the item's usage hint is shown.
    Describe,
}

/// A catalog item definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemDef {
    /// Catalog key, matching [`ItemId`] values.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Text shown on pickup and when examined.
    pub description: &'static str,
    /// Usage hint shown for items without a dedicated effect.
    pub usage: &'static str,
    /// Behavior when used.
    pub effect: UseEffect,
}

/// Every item that can exist in the game.
pub const ITEMS: &[ItemDef] = &[
    ItemDef {
        id: "phone",
        name: "Gaming Phone",
        description: "Your precious phone. 12% battery left. No signal here though...",
        usage: "Maybe you can find a spot with better reception...",
        effect: UseEffect::Describe,
    },
    ItemDef {
        id: "portable_charger",
        name: "Portable Charger",
        description: "A portable battery pack. Could charge your phone if needed.",
        usage: "Use this to charge your phone.",
        effect: UseEffect::Charge {
            amount: 50,
            requires: "phone",
            message: "You charge your phone. Technology beats magic every time!",
            refusal: "You need your phone to use this. Obviously.",
        },
    },
    ItemDef {
        id: "trail_map",
        name: "Trail Map",
        description: "A somewhat useful map of the camping grounds. If only you were better at reading maps...",
        usage: "Study the map to better understand your surroundings.",
        effect: UseEffect::Describe,
    },
    ItemDef {
        id: "compass",
        name: "Compass",
        description: "An old compass. Not as good as GPS, but it'll have to do.",
        usage: "Use this to maintain your direction.",
        effect: UseEffect::Describe,
    },
    ItemDef {
        id: "granola_bar",
        name: "Granola Bar",
        description: "Not as good as gaming snacks, but it'll give you energy.",
        usage: "Eat to recover some energy.",
        effect: UseEffect::Restore {
            energy: 15.0,
            message: "You eat the granola bar. Not as satisfying as gaming snacks...",
        },
    },
    ItemDef {
        id: "energy_drink",
        name: "Energy Drink",
        description: "You snuck this in! Perfect for gaming... or escaping.",
        usage: "Drink to get a significant energy boost.",
        effect: UseEffect::Restore {
            energy: 30.0,
            message: "The energy drink restores your power! Almost as good as blue buff.",
        },
    },
    ItemDef {
        id: "flashlight",
        name: "Flashlight",
        description: "Better than your phone's flashlight. Helps you see in dark areas.",
        usage: "Use to navigate in dark areas.",
        effect: UseEffect::Describe,
    },
    ItemDef {
        id: "car_keys",
        name: "Car Keys",
        description: "Keys to someone's car in the parking lot. Freedom awaits!",
        usage: "Use these at the parking lot...",
        effect: UseEffect::Describe,
    },
    ItemDef {
        id: "ranger_schedule",
        name: "Ranger Schedule",
        description: "A schedule showing ranger patrol times. Very useful for sneaking around!",
        usage: "Study this to avoid ranger encounters.",
        effect: UseEffect::Describe,
    },
    ItemDef {
        id: "whistle",
        name: "Emergency Whistle",
        description: "Could be useful for distracting people... or attracting unwanted attention.",
        usage: "Blow the whistle to create a distraction.",
        effect: UseEffect::Describe,
    },
    ItemDef {
        id: "snacks",
        name: "Trail Mix",
        description: "Could be used to distract wildlife... or restore energy.",
        usage: "Use as distraction or eat for energy.",
        effect: UseEffect::Describe,
    },
];

/// Look up an item definition by identifier.
pub fn item(id: &ItemId) -> Option<&'static ItemDef> {
    item_by_key(id.as_str())
}

/// Look up an item definition by its raw key.
pub fn item_by_key(key: &str) -> Option<&'static ItemDef> {
    ITEMS.iter().find(|def| def.id == key)
}

/// Display name for `id`, falling back to the raw key for unknown items.
pub fn item_name(id: &ItemId) -> &str {
    item(id).map_or_else(|| id.as_str(), |def| def.name)
}

/// Items that may spawn in a room of the given type.
pub const fn spawn_pool(room_type: RoomType) -> &'static [&'static str] {
    match room_type {
        RoomType::Campsite => &["granola_bar", "flashlight"],
        RoomType::Forest => &["snacks"],
        RoomType::DenseForest => &["compass"],
        RoomType::Clearing => &["trail_map"],
        RoomType::Trail => &["ranger_schedule"],
        RoomType::RangerPost => &["portable_charger"],
        RoomType::ParkingLot => &["car_keys"],
        RoomType::Cabin => &["energy_drink", "whistle"],
        RoomType::Creek | RoomType::Cave | RoomType::BearArea | RoomType::Road => &[],
    }
}

// ---------------------------------------------------------------------------
// Obstacles
// ---------------------------------------------------------------------------

/// The obstacles the generator can attach to rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ObstacleKind {
    /// A bear on the path.
    Bear,
    /// A patrolling park ranger.
    Ranger,
    /// A trail too dark to follow.
    DarkTrail,
    /// A creek to cross without soaking the phone.
    Creek,
}

/// A catalog obstacle definition, the template for [`GameEvent`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstacleDef {
    /// Which obstacle this is.
    pub kind: ObstacleKind,
    /// Identifier given to every event instantiated from this definition.
    pub event_id: &'static str,
    /// Classification of the instantiated event.
    pub event_kind: EventKind,
    /// Text shown when the player meets the obstacle.
    pub description: &'static str,
    /// Items needed to get past.
    pub requires: &'static [&'static str],
    /// Text shown when the player has what it takes.
    pub success: &'static str,
    /// Text shown when something is missing.
    pub failure: &'static str,
}

impl ObstacleDef {
    /// Build a fresh, unresolved event from this definition.
    pub fn instantiate(&self) -> GameEvent {
        GameEvent {
            id: EventId::from(self.event_id),
            kind: self.event_kind,
            description: self.description.to_owned(),
            resolved: false,
            requires: self.requires.iter().map(|&key| ItemId::from(key)).collect(),
            rewards: Vec::new(),
        }
    }
}

/// Every obstacle that can appear in the game.
pub const OBSTACLES: &[ObstacleDef] = &[
    ObstacleDef {
        kind: ObstacleKind::Bear,
        event_id: "bear_encounter",
        event_kind: EventKind::Encounter,
        description: "A bear is blocking your path! Maybe you can distract it...",
        requires: &["snacks"],
        success: "You throw the snacks away from the path. The bear happily wobbles away to eat them.",
        failure: "The bear looks hungry... better find something to distract it with!",
    },
    ObstacleDef {
        kind: ObstacleKind::Ranger,
        event_id: "ranger_patrol",
        event_kind: EventKind::Encounter,
        description: "A park ranger is patrolling the area! Need to time this carefully...",
        requires: &["ranger_schedule"],
        success: "Using the ranger schedule, you time your movement perfectly between patrols.",
        failure: "Better find a way to know the ranger's schedule...",
    },
    ObstacleDef {
        kind: ObstacleKind::DarkTrail,
        event_id: "dark_trail",
        event_kind: EventKind::Obstacle,
        description: "This trail is too dark to navigate safely...",
        requires: &["flashlight"],
        success: "With the flashlight, you can safely navigate the dark trail.",
        failure: "You need some source of light to proceed safely.",
    },
    ObstacleDef {
        kind: ObstacleKind::Creek,
        event_id: "creek_crossing",
        event_kind: EventKind::Obstacle,
        description: "A creek blocks your path. The water isn't deep, but your gaming phone can't get wet!",
        requires: &["trail_map"],
        success: "The trail map shows a small bridge nearby. You cross safely!",
        failure: "There must be a safer way to cross...",
    },
];

/// Look up the definition of an obstacle.
///
/// Returns `None` only if [`OBSTACLES`] is missing an entry for `kind`.
pub fn obstacle(kind: ObstacleKind) -> Option<&'static ObstacleDef> {
    OBSTACLES.iter().find(|def| def.kind == kind)
}

/// Find the obstacle an event was instantiated from.
pub fn obstacle_for_event(id: &EventId) -> Option<&'static ObstacleDef> {
    OBSTACLES.iter().find(|def| def.event_id == id.as_str())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn item_ids_are_unique() {
        let ids: BTreeSet<&str> = ITEMS.iter().map(|def| def.id).collect();
        assert_eq!(ids.len(), ITEMS.len());
    }

    #[test]
    fn lookup_known_and_unknown_items() {
        let drink = item(&ItemId::from("energy_drink"));
        assert_eq!(drink.map(|def| def.name), Some("Energy Drink"));
        assert!(item(&ItemId::from("lightsaber")).is_none());
    }

    #[test]
    fn item_name_falls_back_to_key() {
        assert_eq!(item_name(&ItemId::from("snacks")), "Trail Mix");
        assert_eq!(item_name(&ItemId::from("mystery")), "mystery");
    }

    #[test]
    fn consumables_restore_energy() {
        let drink = item_by_key("energy_drink").map(|def| def.effect);
        assert!(matches!(drink, Some(UseEffect::Restore { energy, .. }) if (energy - 30.0).abs() < f64::EPSILON));
        let bar = item_by_key("granola_bar").map(|def| def.effect);
        assert!(matches!(bar, Some(UseEffect::Restore { energy, .. }) if (energy - 15.0).abs() < f64::EPSILON));
    }

    #[test]
    fn charger_requires_phone() {
        let charger = item_by_key("portable_charger").map(|def| def.effect);
        assert!(matches!(
            charger,
            Some(UseEffect::Charge { amount: 50, requires: "phone", .. })
        ));
    }

    #[test]
    fn spawn_pools_reference_catalog_items() {
        let all_types = [
            RoomType::Campsite,
            RoomType::Forest,
            RoomType::DenseForest,
            RoomType::Clearing,
            RoomType::Trail,
            RoomType::Creek,
            RoomType::RangerPost,
            RoomType::ParkingLot,
            RoomType::Cabin,
            RoomType::Cave,
            RoomType::BearArea,
            RoomType::Road,
        ];
        for room_type in all_types {
            for key in spawn_pool(room_type) {
                assert!(item_by_key(key).is_some(), "{key} missing from catalog");
            }
        }
        assert!(spawn_pool(RoomType::Creek).is_empty());
    }

    #[test]
    fn every_obstacle_kind_is_defined() {
        for kind in [
            ObstacleKind::Bear,
            ObstacleKind::Ranger,
            ObstacleKind::DarkTrail,
            ObstacleKind::Creek,
        ] {
            assert!(obstacle(kind).is_some());
        }
    }

    #[test]
    fn instantiate_builds_unresolved_event() {
        let event = obstacle(ObstacleKind::Creek).map(ObstacleDef::instantiate);
        let Some(event) = event else {
            return;
        };
        assert_eq!(event.id, "creek_crossing");
        assert_eq!(event.kind, EventKind::Obstacle);
        assert!(!event.resolved);
        assert_eq!(event.requires, vec![ItemId::from("trail_map")]);
        assert!(event.rewards.is_empty());
        assert_eq!(
            obstacle_for_event(&event.id).map(|def| def.kind),
            Some(ObstacleKind::Creek)
        );
    }
}
