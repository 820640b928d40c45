//! Chain Reaction game logic.
//!
//! Players take turns dropping tokens onto a grid. A cell whose token count
//! reaches its capacity (the number of orthogonal neighbors) explodes: it
//! empties, sends one token to each neighbor and captures any opposing tokens
//! there. Players who have moved and own no tokens are eliminated; the last
//! player standing wins.
//!
//! # Architecture
//!
//! - **Board**: arena of [`Cell`]s addressed by [`Position`], owns cascade resolution
//! - **Roster**: active seats, token tallies and elimination
//! - **Game**: turn order, move validation, game-over detection
//! - **Search**: alpha-beta minimax over cloned [`Game`] snapshots
//!
//! # Example
//!
//! ```
//! use chain_reaction_core::{AlphaBeta, Game, Neutral, Position};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = Game::new(3, 3, 2)?;
//! let first = game.current_player().expect("game has players");
//! game.play(Position::new(1, 1), first)?;
//!
//! let engine = AlphaBeta::new(2, Neutral);
//! let report = engine.search(&game);
//! assert!(report.best().is_some());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod cell;
mod game;
mod palette;
mod position;
mod roster;
mod search;

pub mod invariants;

pub use action::{Move, MoveError, MoveOutcome, SetupError};
pub use board::{Board, Placement};
pub use cell::{Cell, Neighbors};
pub use game::Game;
pub use palette::{PaletteError, TokenColor};
pub use position::Position;
pub use roster::{PlayerId, PlayerRecord, Roster};
pub use search::{
    AlphaBeta, Evaluator, LOSS_SCORE, Material, Neutral, Playable, SearchReport, WIN_SCORE,
};
