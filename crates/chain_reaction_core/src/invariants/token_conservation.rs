//! Token conservation: explosions move tokens, they never create or destroy them.

use super::Invariant;
use crate::Game;

/// Invariant: tallies, board contents and moves played all agree.
///
/// Every move adds exactly one token; cascades only redistribute. So the
/// sum of the players' tallies equals the tokens on the board, which equals
/// the number of moves in the history.
pub struct TokenConservationInvariant;

impl Invariant<Game> for TokenConservationInvariant {
    fn holds(game: &Game) -> bool {
        let on_board = game.board().total_tokens();
        let tallied = game.roster().total_tokens();
        on_board == tallied && on_board as usize == game.history().len()
    }

    fn description() -> &'static str {
        "Token tallies match the board and the number of moves played"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PlayerId, Position};

    #[test]
    fn test_holds_through_explosions() {
        let mut game = Game::new(2, 3, 2).unwrap();
        let script = [(0, 0), (1, 2), (0, 0), (1, 2), (0, 1), (1, 1)];
        for (row, col) in script {
            let player = game.current_player().unwrap();
            if game.play(Position::new(row, col), player).is_err() {
                break;
            }
            assert!(TokenConservationInvariant::holds(&game));
        }
    }

    #[test]
    fn test_lost_token_violates() {
        let mut game = Game::new(3, 3, 2).unwrap();
        game.play(Position::new(0, 0), PlayerId(0)).unwrap();
        game.board.cells[0].tokens = 0;
        assert!(!TokenConservationInvariant::holds(&game));
    }
}
