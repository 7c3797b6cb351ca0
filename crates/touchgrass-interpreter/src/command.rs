//! Command parsing.
//!
//! Input is lower-cased, trimmed, and split on whitespace. The first word
//! selects the command; the remaining words, rejoined with single spaces,
//! form its argument. Bare direction words (`north`, `n`, ...) are moves.

use std::fmt;

use touchgrass_types::Direction;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move one cell. `None` when the direction was missing or unknown.
    Go(Option<Direction>),
    /// Show the command reference.
    Help,
    /// Describe the current room.
    Look,
    /// Pick up an item from the room.
    Take(String),
    /// Use a held item.
    Use(String),
    /// Look closely at a room feature or held item.
    Examine(String),
    /// List held items.
    Inventory,
    /// Show energy, phone, clock, and move count.
    Status,
    /// Emit a random complaint.
    Complain,
    /// Anything else; carries the unrecognized first word.
    Unknown(String),
}

impl Command {
    /// Parse one line of player input. Never fails.
    pub fn parse(input: &str) -> Self {
        let normalized = input.trim().to_lowercase();
        let mut words = normalized.split_whitespace();
        let verb = words.next().unwrap_or_default();
        let arg = words.collect::<Vec<_>>().join(" ");

        if let Some(direction) = Direction::from_word(verb) {
            return Self::Go(Some(direction));
        }

        match verb {
            "go" => Self::Go(Direction::from_word(&arg)),
            "help" => Self::Help,
            "look" | "l" => Self::Look,
            "take" | "get" => Self::Take(arg),
            "use" => Self::Use(arg),
            "examine" | "x" => Self::Examine(arg),
            "inventory" | "i" => Self::Inventory,
            "status" => Self::Status,
            "complain" => Self::Complain,
            other => Self::Unknown(other.to_owned()),
        }
    }

    /// Short name of the command, for logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Go(_) => "go",
            Self::Help => "help",
            Self::Look => "look",
            Self::Take(_) => "take",
            Self::Use(_) => "use",
            Self::Examine(_) => "examine",
            Self::Inventory => "inventory",
            Self::Status => "status",
            Self::Complain => "complain",
            Self::Unknown(_) => "unknown",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Go(Some(direction)) => write!(f, "go {}", direction.label().to_lowercase()),
            Self::Take(arg) | Self::Use(arg) | Self::Examine(arg) if !arg.is_empty() => {
                write!(f, "{} {arg}", self.name())
            }
            Self::Unknown(verb) if !verb.is_empty() => f.write_str(verb),
            _ => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_and_go() {
        assert_eq!(Command::parse("go north"), Command::Go(Some(Direction::North)));
        assert_eq!(Command::parse("  GO   West "), Command::Go(Some(Direction::West)));
        assert_eq!(Command::parse("s"), Command::Go(Some(Direction::South)));
        assert_eq!(Command::parse("East"), Command::Go(Some(Direction::East)));
        assert_eq!(Command::parse("go"), Command::Go(None));
        assert_eq!(Command::parse("go up"), Command::Go(None));
        assert_eq!(Command::parse("go north east"), Command::Go(None));
    }

    #[test]
    fn verbs_and_aliases() {
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("l"), Command::Look);
        assert_eq!(Command::parse("LOOK"), Command::Look);
        assert_eq!(Command::parse("i"), Command::Inventory);
        assert_eq!(Command::parse("inventory"), Command::Inventory);
        assert_eq!(Command::parse("status"), Command::Status);
        assert_eq!(Command::parse("complain"), Command::Complain);
    }

    #[test]
    fn arguments_are_lowercased_and_joined() {
        assert_eq!(
            Command::parse("get Energy_Drink"),
            Command::Take("energy_drink".to_owned())
        );
        assert_eq!(
            Command::parse("x   the    trees"),
            Command::Examine("the trees".to_owned())
        );
        assert_eq!(Command::parse("use"), Command::Use(String::new()));
    }

    #[test]
    fn unknown_input() {
        assert_eq!(Command::parse(""), Command::Unknown(String::new()));
        assert_eq!(Command::parse("   "), Command::Unknown(String::new()));
        assert_eq!(Command::parse("dance wildly"), Command::Unknown("dance".to_owned()));
        assert_eq!(Command::parse("restart"), Command::Unknown("restart".to_owned()));
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(Command::parse("N").to_string(), "go north");
        assert_eq!(Command::parse("get  snacks").to_string(), "take snacks");
        assert_eq!(Command::parse("take").to_string(), "take");
        assert_eq!(Command::parse("flail").to_string(), "flail");
    }
}
