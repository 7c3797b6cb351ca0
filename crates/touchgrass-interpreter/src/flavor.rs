//! Fixed reply texts.
//!
//! Every guidance message the interpreter can return lives here, along with
//! the help text and the pool of complaints sprinkled into replies.

use touchgrass_world::RandomSource;
use touchgrass_world::random::choose;

/// Lines a reluctant camper mutters at random.
pub const COMPLAINTS: &[&str] = &[
    "These bushes are useless for ganking...",
    "No jungle camps to farm out here.",
    "Can't even ward these bushes.",
    "If only I could recall back to base right now.",
    "This grass touching debuff is really annoying.",
    "Seriously need some movement speed buffs.",
    "Zero CS in the last 20 minutes...",
    "The client would probably run better out here.",
    "Even Yuumi would be more useful than me in this forest.",
    "Wish I could FF this camping trip.",
    "Their jungler (the bear) is definitely camping my lane.",
];

/// Command reference returned by `help`.
pub const HELP: &str = "Available Commands:
- go [direction]: Move around (go north, go south, etc.). No flash available.
- look (l): Look around. Less effective than actual wards.
- take/get [item]: Pick up something. Like CS, but IRL.
- use [item]: Use an item. More complicated than pressing 1-6.
- examine (x) [thing]: Look at something closely. Like checking death recap.
- inventory (i): Check what you're carrying. Your actual items, not shop items.
- status: Check your vitals. Worse UI than League.
- complain: Voice your gamer frustrations.
- help: Show this help message.

Pro tip: If only you could buy Control Wards IRL...";

/// Header above the exit list in `look`.
pub const PATHS_HEADER: &str = "Possible paths (no flash available):";

/// Header above the item list in `look`.
pub const ITEMS_HEADER: &str = "You can see:";

/// `go` without a recognizable direction.
pub const GO_WHERE: &str = "Go where? Try 'go north', 'go south', 'go east', or 'go west'.";

/// Movement refused for lack of energy.
pub const TOO_TIRED: &str = "You're too tired to move. Need healing, but no support in sight...";

/// `take` without an argument.
pub const TAKE_WHAT: &str = "Take what? This isn't auto-attack...";

/// `take` of something not in the room.
pub const TAKE_MISSING: &str = "You don't see that here. Missing CS IRL too...";

/// `use` without an argument.
pub const USE_WHAT: &str = "Use what? You need to specify, just like pinging items in League.";

/// `use` of something not held.
pub const USE_NOT_HELD: &str = "You don't have that item. Check your inventory first, noob.";

/// `examine` without an argument.
pub const EXAMINE_WHAT: &str = "Examine what? Be specific, like reading ability tooltips!";

/// `examine` of something neither in the room nor held.
pub const EXAMINE_MISSING: &str = "You don't see that here. Your map awareness needs work.";

/// `inventory` with nothing held.
pub const INVENTORY_EMPTY: &str = "Your inventory is empty. Worse than 0/10/0...";

/// Fallback for unrecognized commands.
pub const UNKNOWN: &str =
    "What are you trying to do? Type 'help' for commands. If only this was as easy as pressing QWER...";

/// One complaint chosen uniformly at random.
pub fn complaint(rng: &mut (impl RandomSource + ?Sized)) -> &'static str {
    choose(rng, COMPLAINTS).copied().unwrap_or_default()
}
