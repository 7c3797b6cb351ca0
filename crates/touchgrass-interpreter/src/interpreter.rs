//! Command handlers.
//!
//! [`interpret`] parses a line and hands it to [`execute`], which dispatches
//! to one handler per [`Command`] variant. Handlers read the session through
//! the [`GameStore`] and mutate it only through store operations. Each
//! returns a single reply string that may span several lines.

use std::fmt::Write as _;

use touchgrass_core::{GameStore, MoveOutcome};
use touchgrass_types::{Direction, ItemId};
use touchgrass_world::catalog::{self, UseEffect};
use touchgrass_world::descriptions::SURROUNDINGS;
use touchgrass_world::RandomSource;
use tracing::debug;

use crate::command::Command;
use crate::flavor;

/// Parse `input` and run it against the session.
pub fn interpret(
    store: &mut GameStore,
    rng: &mut (impl RandomSource + ?Sized),
    input: &str,
) -> String {
    execute(store, rng, &Command::parse(input))
}

/// Run an already parsed command against the session.
pub fn execute(
    store: &mut GameStore,
    rng: &mut (impl RandomSource + ?Sized),
    command: &Command,
) -> String {
    debug!(%command, "Executing command");
    match command {
        Command::Go(Some(direction)) => go(store, rng, *direction),
        Command::Go(None) => flavor::GO_WHERE.to_owned(),
        Command::Help => flavor::HELP.to_owned(),
        Command::Look => look(store, rng),
        Command::Take(item) => take(store, item),
        Command::Use(item) => use_item(store, item),
        Command::Examine(target) => examine(store, rng, target),
        Command::Inventory => inventory(store),
        Command::Status => status(store, rng),
        Command::Complain => flavor::complaint(rng).to_owned(),
        Command::Unknown(_) => flavor::UNKNOWN.to_owned(),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Describe the current room: description, exits, items, and maybe a
/// complaint.
fn look(store: &GameStore, rng: &mut (impl RandomSource + ?Sized)) -> String {
    let position = store.state().position;
    let Some(room) = store.current_room() else {
        return flavor::PATHS_HEADER.to_owned();
    };

    let mut text = format!("{}\n\n{}", room.description, flavor::PATHS_HEADER);
    for direction in store.grid().exits(position) {
        let _ = write!(text, "\n- {}", direction.label());
    }

    if !room.items.is_empty() {
        let _ = write!(text, "\n\n{}", flavor::ITEMS_HEADER);
        for item in &room.items {
            let _ = write!(text, "\n- {}", catalog::item_name(item));
        }
    }

    if rng.chance(store.config().interpreter.flavor_chance) {
        let _ = write!(text, "\n\n{}", flavor::complaint(rng));
    }
    text
}

/// Move, then describe wherever the player ended up.
fn go(
    store: &mut GameStore,
    rng: &mut (impl RandomSource + ?Sized),
    direction: Direction,
) -> String {
    if store.state().energy < store.config().movement.min_energy_to_move {
        return flavor::TOO_TIRED.to_owned();
    }

    let outcome = store.move_player(direction, rng);
    let mut text = look(store, rng);
    if outcome != MoveOutcome::Blocked && store.config().interpreter.narrate_obstacles {
        narrate_obstacles(store, &mut text);
    }
    text
}

/// Report each unresolved event in the current room, resolving those the
/// player is equipped for.
fn narrate_obstacles(store: &mut GameStore, text: &mut String) {
    let pending: Vec<_> = store
        .current_room()
        .map(|room| {
            room.events
                .iter()
                .filter(|event| !event.resolved)
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    for event in pending {
        let obstacle = catalog::obstacle_for_event(&event.id);
        let prepared = event.requires.iter().all(|item| store.state().has_item(item));
        let _ = write!(text, "\n\n{}", event.description);

        if prepared {
            store.resolve_event(&event.id);
            for reward in &event.rewards {
                store.add_to_inventory(reward.clone());
            }
            if let Some(def) = obstacle {
                let _ = write!(text, "\n{}", def.success);
            }
        } else if let Some(def) = obstacle {
            let _ = write!(text, "\n{}", def.failure);
        }
    }
}

fn take(store: &mut GameStore, item: &str) -> String {
    if item.is_empty() {
        return flavor::TAKE_WHAT.to_owned();
    }

    let id = ItemId::from(item);
    if !store.take_room_item(&id) {
        return flavor::TAKE_MISSING.to_owned();
    }
    store.add_to_inventory(id.clone());

    catalog::item(&id).map_or_else(
        || format!("You pick up {id}."),
        |def| format!("You pick up {}. {}", def.name, def.description),
    )
}

/// Apply a held item's catalog effect.
fn use_item(store: &mut GameStore, item: &str) -> String {
    if item.is_empty() {
        return flavor::USE_WHAT.to_owned();
    }

    let id = ItemId::from(item);
    if !store.state().has_item(&id) {
        return flavor::USE_NOT_HELD.to_owned();
    }
    let Some(def) = catalog::item(&id) else {
        return flavor::USE_NOT_HELD.to_owned();
    };

    match def.effect {
        UseEffect::Restore { energy, message } => {
            store.update_energy(energy);
            store.remove_from_inventory(&id);
            debug!(item = %id, energy = store.state().energy, "Consumable used");
            message.to_owned()
        }
        UseEffect::Charge {
            amount,
            requires,
            message,
            refusal,
        } => {
            if !store.state().has_item(&ItemId::from(requires)) {
                return refusal.to_owned();
            }
            store.update_phone_charge(amount);
            debug!(item = %id, phone_charge = store.state().phone_charge, "Phone charged");
            message.to_owned()
        }
        UseEffect::Describe => def.usage.to_owned(),
    }
}

/// Look closely at a room feature or a held item.
fn examine(store: &GameStore, rng: &mut (impl RandomSource + ?Sized), target: &str) -> String {
    if target.is_empty() {
        return flavor::EXAMINE_WHAT.to_owned();
    }
    let Some(room) = store.current_room() else {
        return flavor::EXAMINE_MISSING.to_owned();
    };

    if target == SURROUNDINGS || target == "around" {
        let surroundings = room
            .examine
            .get(SURROUNDINGS)
            .map_or(room.description.as_str(), String::as_str);
        return format!("{surroundings}\n{}", flavor::complaint(rng));
    }

    if let Some(text) = room.examine.get(target) {
        return text.clone();
    }

    let id = ItemId::from(target);
    if store.state().has_item(&id) {
        return catalog::item(&id).map_or_else(|| id.to_string(), |def| def.description.to_owned());
    }

    flavor::EXAMINE_MISSING.to_owned()
}

fn inventory(store: &GameStore) -> String {
    let held = &store.state().inventory;
    if held.is_empty() {
        return flavor::INVENTORY_EMPTY.to_owned();
    }

    held.iter()
        .fold(String::from("You're carrying:\n"), |mut text, item| {
            let _ = writeln!(text, "- {}", catalog::item_name(item));
            text
        })
}

fn status(store: &GameStore, rng: &mut (impl RandomSource + ?Sized)) -> String {
    let state = store.state();
    format!(
        "Status Report:\n\
         Energy: {}/{} (no mana though)\n\
         Phone: {}% (worse than energy problems in ARAM)\n\
         Time: {}\n\
         Moves Made: {} (still better KDA than my ranked games)\n\
         {}",
        state.energy,
        state.max_energy,
        state.phone_charge,
        state.clock_label(),
        state.moves,
        flavor::complaint(rng),
    )
}
