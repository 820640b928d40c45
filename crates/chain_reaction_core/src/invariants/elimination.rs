//! Elimination: the active set is exactly the players still in contention.

use super::Invariant;
use crate::Game;

/// Invariant: a seat is out of the game iff it has moved and owns nothing.
///
/// Eliminated players can never regain tokens, since captures only credit
/// the mover.
pub struct EliminationInvariant;

impl Invariant<Game> for EliminationInvariant {
    fn holds(game: &Game) -> bool {
        let roster = game.roster();
        roster.records().iter().all(|record| {
            let knocked_out = *record.has_moved() && *record.tokens() == 0;
            roster.is_active(*record.id()) != knocked_out
        })
    }

    fn description() -> &'static str {
        "Active players are exactly those who have not moved or still own tokens"
    }
}
