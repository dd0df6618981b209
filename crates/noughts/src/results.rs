//! Append-only persistence for round outcomes.
//!
//! One line per finished round: `Winner : X`, `Winner : O`, or `Draw`.
//! Nothing else is ever written to the file.

use derive_getters::Getters;
use noughts_core::Player;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Final result of a round, as recorded in the results log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The given mark completed three in a row.
    Winner(Player),
    /// The board filled with no three in a row.
    Draw,
}

impl Outcome {
    /// The log line for this outcome, including the trailing newline.
    pub fn record_line(&self) -> String {
        match self {
            Outcome::Winner(mark) => format!("Winner : {mark}\n"),
            Outcome::Draw => "Draw\n".to_string(),
        }
    }

    /// Parses one log line back into an outcome.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Malformed`] for anything but the three known
    /// line forms.
    pub fn parse_line(line: &str) -> Result<Self, LogError> {
        match line.trim_end() {
            "Winner : X" => Ok(Outcome::Winner(Player::X)),
            "Winner : O" => Ok(Outcome::Winner(Player::O)),
            "Draw" => Ok(Outcome::Draw),
            other => Err(LogError::Malformed(other.to_string())),
        }
    }
}

/// Error raised by the results log.
#[derive(Debug, derive_more::Display)]
pub enum LogError {
    /// The log file could not be read or written.
    #[display("results log I/O error: {}", _0)]
    Io(std::io::Error),
    /// A line in the log is not one of the known record forms.
    #[display("malformed results line: '{}'", _0)]
    Malformed(String),
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogError::Io(err) => Some(err),
            LogError::Malformed(_) => None,
        }
    }
}

/// Win/draw counts aggregated from the log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Tally {
    /// Rounds X won.
    x_wins: usize,
    /// Rounds O won.
    o_wins: usize,
    /// Drawn rounds.
    draws: usize,
}

impl Tally {
    /// Total rounds recorded.
    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Append-only results log at a fixed path.
#[derive(Debug, Clone)]
pub struct ResultsLog {
    path: PathBuf,
}

impl ResultsLog {
    /// Creates a log handle. The file is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path records are appended to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one outcome record.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Io`] if the file cannot be opened or written.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn append(&self, outcome: Outcome) -> Result<(), LogError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(LogError::Io)?;
        file.write_all(outcome.record_line().as_bytes())
            .map_err(LogError::Io)?;
        debug!(?outcome, "outcome recorded");
        Ok(())
    }

    /// Tallies every record in the log.
    ///
    /// A missing file is an empty log, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Io`] on read failure and
    /// [`LogError::Malformed`] if any line does not parse.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn tally(&self) -> Result<Tally, LogError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Tally::default());
            }
            Err(err) => return Err(LogError::Io(err)),
        };

        let mut tally = Tally::default();
        for line in contents.lines() {
            match Outcome::parse_line(line)? {
                Outcome::Winner(Player::X) => tally.x_wins += 1,
                Outcome::Winner(Player::O) => tally.o_wins += 1,
                Outcome::Draw => tally.draws += 1,
            }
        }
        Ok(tally)
    }
}
