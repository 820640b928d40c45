//! Ownership consistency between cells and tallies.

use super::Invariant;
use crate::Game;

/// Invariant: a cell has an owner exactly when it holds tokens, and each
/// player's tally equals the tokens in the cells they own.
pub struct OwnershipInvariant;

impl Invariant<Game> for OwnershipInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let cells_consistent = board
            .cells()
            .iter()
            .all(|cell| cell.owner().is_some() == (cell.tokens() > 0));
        let tallies_consistent = game
            .roster()
            .records()
            .iter()
            .all(|record| *record.tokens() == board.tokens_owned_by(*record.id()));
        cells_consistent && tallies_consistent
    }

    fn description() -> &'static str {
        "Cell owners and player tallies agree"
    }
}
