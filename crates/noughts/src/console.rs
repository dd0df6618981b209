//! Line-oriented console input and output.
//!
//! The console owns the raw-text side of the game: menu display, move
//! prompts, and board rendering. Malformed (non-numeric) input is
//! re-prompted here; range and occupancy checks belong to the rules
//! engine and come back through the round driver.

use anyhow::{Context, Result, bail};
use noughts_core::Board;
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};
use tracing::debug;

use crate::menu::MenuChoice;

/// Console over any `BufRead`/`Write` pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    /// Console over the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console from explicit input and output handles.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Shows the main menu and its prompt.
    pub fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "========MENU========")?;
        writeln!(self.output, "1 : Play with X")?;
        writeln!(self.output, "2 : Play with O")?;
        writeln!(self.output, "3 : Exit")?;
        write!(self.output, "Enter your choice:> ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads menu lines until one parses as a valid choice.
    ///
    /// # Errors
    ///
    /// Fails if the input stream closes.
    pub fn read_menu_choice(&mut self) -> Result<MenuChoice> {
        loop {
            let line = self.read_trimmed()?;
            match MenuChoice::parse(&line) {
                Some(choice) => {
                    debug!(?choice, "menu choice selected");
                    return Ok(choice);
                }
                None => {
                    write!(self.output, "Invalid choice! Enter your choice:> ")?;
                    self.output.flush()?;
                }
            }
        }
    }

    /// Prompts for a move and reads lines until one parses as a number.
    ///
    /// The number is returned raw; the rules engine decides whether it
    /// names a real, open square.
    ///
    /// # Errors
    ///
    /// Fails if the input stream closes.
    pub fn prompt_move(&mut self) -> Result<u8> {
        loop {
            write!(self.output, "Your Turn :> ")?;
            self.output.flush()?;
            let line = self.read_trimmed()?;
            match line.parse::<u8>() {
                Ok(number) => return Ok(number),
                Err(_) => {
                    debug!(input = %line, "discarding non-numeric move input");
                    writeln!(
                        self.output,
                        "Invalid input! Please enter a number between 1 and 9."
                    )?;
                }
            }
        }
    }

    /// Renders the board.
    pub fn show_board(&mut self, board: &Board) -> Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", board.display())?;
        self.output.flush()?;
        Ok(())
    }

    /// Writes one line of text.
    pub fn show_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Pauses until the player presses Enter (or the input closes).
    pub fn wait_for_enter(&mut self) -> Result<()> {
        write!(self.output, "\nPress Enter to return to menu...")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("reading console input")?;
        writeln!(self.output)?;
        Ok(())
    }

    fn read_trimmed(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("reading console input")?;
        if read == 0 {
            bail!("console input closed");
        }
        Ok(line.trim().to_string())
    }
}
