//! The read-eval-print loop.
//!
//! Owns the current [`Session`] and everything the core leaves to its
//! caller: the intro, win/loss announcements, refusing commands once a game
//! has ended, and `restart`, which throws the session away and generates a
//! new one. `quit` (or end of input) leaves the loop.

use std::io::{BufRead, Write};

use touchgrass_core::{GameConfig, LossCause, Outcome, Session};
use touchgrass_world::RandomSource;
use tracing::info;

use crate::error::TerminalError;

/// Shown at the start of every session.
pub const INTRO: &str = "You wake up in your tent, the sound of nature assaulting your ears.
Your parents forced you to go camping to \"touch grass\" and \"get some fresh air.\"
But they don't understand - you have ranked games to play! Your League of Legends
rank isn't going to climb itself.

Your phone shows 12% battery and no signal. Everyone else is asleep.
This is your chance to escape this outdoor prison and get back to what really
matters - gaming.

Type 'help' to see available commands, or 'look' to check your surroundings.
(Pro tip: You can also 'complain' about the lack of gaming amenities.)";

/// Reply to any command other than `restart` after the game has ended.
pub const GAME_OVER_PROMPT: &str = "Game over! Type 'restart' to try again.";

const PROMPT: &str = "> ";

/// Run games until the input ends or the player types `quit`.
///
/// # Errors
///
/// Returns [`TerminalError::Io`] if reading input or writing output fails.
pub fn run(
    config: &GameConfig,
    rng: &mut (impl RandomSource + ?Sized),
    input: impl BufRead,
    output: &mut impl Write,
) -> Result<(), TerminalError> {
    let mut session = Session::start(config, rng);
    writeln!(output, "{INTRO}")?;

    let mut lines = input.lines();
    loop {
        write!(output, "\n{PROMPT}")?;
        output.flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };

        let command = line.trim().to_lowercase();
        match command.as_str() {
            "" => continue,
            "quit" | "exit" => break,
            "restart" => {
                session = Session::start(config, rng);
                info!("Session restarted");
                writeln!(output, "{INTRO}")?;
                continue;
            }
            _ => {}
        }

        if session.outcome().is_over() {
            writeln!(output, "{GAME_OVER_PROMPT}")?;
            continue;
        }

        let reply = touchgrass_interpreter::interpret(session.store_mut(), rng, &line);
        writeln!(output, "{reply}")?;

        let outcome = session.outcome();
        if let Some(announcement) = announcement(outcome) {
            let state = session.store().state();
            info!(
                %outcome,
                moves = state.moves,
                energy = state.energy,
                phone_charge = state.phone_charge,
                "Game ended"
            );
            writeln!(output, "\n{announcement}")?;
        }
    }

    Ok(())
}

/// Closing lines for a finished game, `None` while it is in progress.
const fn announcement(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::Lost(LossCause::Exhausted) => Some(
            "You're too exhausted to continue. If only you had a support with healing...\n\
             GAME OVER - Your energy reached 0!",
        ),
        Outcome::Lost(LossCause::PhoneDead) => Some(
            "Your phone is dead. No way to call for help or check op.gg...\n\
             GAME OVER - Your phone died!",
        ),
        Outcome::Won => Some(
            "YOU WIN! You found a way back to civilization!\n\
             Your gaming chair awaits, victorious player!",
        ),
    }
}
