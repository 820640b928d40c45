//! Moves, move results and the errors that reject them.

use super::{PlayerId, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A token placement by one player, recorded in the game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player placing the token.
    pub player: PlayerId,
    /// Where the token is placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// What a successful move did to the board and the roster.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Number of cells that exploded during the cascade.
    explosions: u32,
    /// Opposing tokens that changed hands.
    captured: u32,
    /// Players knocked out by this move, in turn order.
    eliminated: Vec<PlayerId>,
    /// The winner, if this move ended the game.
    winner: Option<PlayerId>,
}

impl MoveOutcome {
    pub(crate) fn new(
        explosions: u32,
        captured: u32,
        eliminated: Vec<PlayerId>,
        winner: Option<PlayerId>,
    ) -> Self {
        Self {
            explosions,
            captured,
            eliminated,
            winner,
        }
    }
}

/// Reasons a move is rejected. A rejected move never mutates the game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The coordinates lie outside the grid.
    #[display("Position {_0} is off the board")]
    OutOfBounds(#[error(not(source))] Position),

    /// The target cell holds another player's tokens.
    #[display("Position {position} is owned by {owner}")]
    CellOwned {
        /// Target cell.
        position: Position,
        /// Player currently holding it.
        owner: PlayerId,
    },

    /// Someone other than the current player tried to move.
    #[display("It's {expected}'s turn, not {actual}'s")]
    NotYourTurn {
        /// Player whose turn it is.
        expected: PlayerId,
        /// Player who attempted the move.
        actual: PlayerId,
    },

    /// The game already has a winner.
    #[display("Game is already over")]
    GameOver,
}

/// Reasons a game cannot be set up.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SetupError {
    /// Rows or columns is zero.
    #[display("Board must have at least one row and one column, got {rows}x{cols}")]
    EmptyBoard {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },

    /// No players were seated.
    #[display("A game needs at least one player")]
    NoPlayers,

    /// More players than seat handles.
    #[display("At most 255 players are supported, got {_0}")]
    TooManyPlayers(#[error(not(source))] usize),
}
