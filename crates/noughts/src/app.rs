//! Menu loop tying the console, the round driver, and the results log.

use anyhow::Result;
use noughts_core::Mark;
use std::io::{BufRead, Write};
use tracing::{info, warn};

use crate::console::Console;
use crate::menu::MenuChoice;
use crate::players::{ComputerPlayer, HumanPlayer};
use crate::results::ResultsLog;
use crate::round::play_round;

/// Runs the menu loop until the player exits.
///
/// Each pass shows the menu, plays one round with the chosen marks, and
/// appends the outcome to the results log. A log failure is reported
/// and swallowed: the round already finished and the next one can
/// start regardless.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, log: &ResultsLog) -> Result<()> {
    match log.tally() {
        Ok(tally) => info!(
            x_wins = tally.x_wins(),
            o_wins = tally.o_wins(),
            draws = tally.draws(),
            "results log loaded"
        ),
        Err(err) => warn!(%err, "could not read results log"),
    }

    loop {
        console.show_menu()?;
        let choice = console.read_menu_choice()?;
        let human_mark = match choice {
            MenuChoice::PlayAsX => Mark::X,
            MenuChoice::PlayAsO => Mark::O,
            MenuChoice::Exit => {
                console.show_line("\nThank you for playing! Goodbye!")?;
                return Ok(());
            }
        };

        info!(human_mark = %human_mark, "round configured");
        let mut human = HumanPlayer::new("You");
        let mut computer = ComputerPlayer::new("Computer");
        let outcome = match human_mark {
            Mark::X => play_round(console, &mut human, &mut computer)?,
            Mark::O => play_round(console, &mut computer, &mut human)?,
        };

        match log.append(outcome) {
            Ok(()) => {
                console.show_line(&format!("Result saved to {}", log.path().display()))?;
            }
            Err(err) => {
                warn!(%err, "failed to record outcome");
                console.show_line("Warning: the result could not be saved.")?;
            }
        }

        console.wait_for_enter()?;
    }
}
