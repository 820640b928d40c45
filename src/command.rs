//! Parsing of typed turn commands.

use chain_reaction_core::Position;
use derive_more::{Display, Error};
use std::str::FromStr;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Abandon the current round.
    Quit,
    /// Place a token. Coordinates are signed so that negative input can be
    /// reported as an invalid move rather than a format error.
    Place {
        /// Row as typed.
        row: i64,
        /// Column as typed.
        col: i64,
    },
}

/// Input that is neither `quit` nor `row,col`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized command: {input:?}")]
pub struct CommandError {
    /// The offending text.
    pub input: String,
}

impl Command {
    /// Board position for a placement, `None` for quit or negative coordinates.
    pub fn position(self) -> Option<Position> {
        match self {
            Command::Quit => None,
            Command::Place { row, col } => Some(Position::new(
                usize::try_from(row).ok()?,
                usize::try_from(col).ok()?,
            )),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.eq_ignore_ascii_case("quit") {
            return Ok(Command::Quit);
        }
        let malformed = || CommandError {
            input: text.to_string(),
        };
        let (row, col) = text.split_once(',').ok_or_else(malformed)?;
        let row = row.trim().parse().map_err(|_| malformed())?;
        let col = col.trim().parse().map_err(|_| malformed())?;
        Ok(Command::Place { row, col })
    }
}
