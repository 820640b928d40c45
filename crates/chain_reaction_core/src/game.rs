//! Turn orchestration for a single game.

use super::action::{Move, MoveError, MoveOutcome, SetupError};
use super::invariants::{ChainReactionInvariants, InvariantSet};
use super::search::Playable;
use super::{Board, PlayerId, Position, Roster};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A game in progress: board, roster, whose turn it is and the move history.
///
/// `Game` has value semantics. A clone shares nothing with the original,
/// so it doubles as the search engine's snapshot type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) roster: Roster,
    pub(crate) turn: usize,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a game on an empty `rows` × `cols` board with `players` seats.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] for a zero dimension, zero players, or more
    /// than 255 players.
    #[instrument]
    pub fn new(rows: usize, cols: usize, players: usize) -> Result<Self, SetupError> {
        if rows == 0 || cols == 0 {
            return Err(SetupError::EmptyBoard { rows, cols });
        }
        if players == 0 {
            return Err(SetupError::NoPlayers);
        }
        let count = u8::try_from(players).map_err(|_| SetupError::TooManyPlayers(players))?;

        info!(rows, cols, players, "Creating game");
        Ok(Self {
            board: Board::new(rows, cols),
            roster: Roster::new(count),
            turn: 0,
            history: Vec::new(),
        })
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player registry.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Active players in turn order.
    pub fn active_players(&self) -> &[PlayerId] {
        self.roster.active()
    }

    /// Number of players still in the game.
    pub fn number_of_players(&self) -> usize {
        self.roster.active().len()
    }

    /// Whose turn it is.
    pub fn current_player(&self) -> Option<PlayerId> {
        self.roster.active().get(self.turn).copied()
    }

    /// True once exactly one player remains.
    pub fn is_over(&self) -> bool {
        self.roster.active().len() == 1
    }

    /// The last player standing, once the game is over.
    pub fn winner(&self) -> Option<PlayerId> {
        if self.is_over() {
            self.roster.active().first().copied()
        } else {
            None
        }
    }

    /// Returns an independent copy for exploring hypothetical moves.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Whether `player` could place at `pos` ignoring turn order.
    pub fn is_legal(&self, pos: Position, player: PlayerId) -> bool {
        self.board.check_placement(pos, player).is_ok()
    }

    /// Cells `player` may place on, row-major.
    pub fn legal_moves(&self, player: PlayerId) -> Vec<Position> {
        self.board
            .positions()
            .filter(|&pos| self.is_legal(pos, player))
            .collect()
    }

    /// Places a token for `player`, resolves the cascade, eliminates
    /// players and advances the turn.
    ///
    /// Only the current player may move.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`], [`MoveError::NotYourTurn`],
    /// [`MoveError::OutOfBounds`] or [`MoveError::CellOwned`]. A rejected
    /// move leaves the game untouched.
    #[instrument(skip(self), fields(player = %player, position = %pos))]
    pub fn play(&mut self, pos: Position, player: PlayerId) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let expected = self.current_player().ok_or(MoveError::GameOver)?;
        if player != expected {
            warn!(expected = %expected, "Player tried to move out of turn");
            return Err(MoveError::NotYourTurn {
                expected,
                actual: player,
            });
        }

        let placement = self.board.place(pos, player, &mut self.roster)?;
        self.roster.mark_moved(player);
        self.history.push(Move::new(player, pos));

        let eliminated = self.roster.eliminate();
        self.advance_turn(player);
        self.assert_invariants();

        let winner = self.winner();
        debug!(
            explosions = placement.explosions(),
            captured = placement.captured(),
            next = ?self.current_player(),
            "Move applied"
        );
        if let Some(winner) = winner {
            info!(winner = %winner, moves = self.history.len(), "Game over");
        }

        Ok(MoveOutcome::new(
            *placement.explosions(),
            *placement.captured(),
            eliminated,
            winner,
        ))
    }

    /// Hands the turn to the active player seated after `mover`.
    ///
    /// A mover never loses tokens on their own move, so they are still active.
    fn advance_turn(&mut self, mover: PlayerId) {
        let active = self.roster.active();
        let at = active.iter().position(|&p| p == mover).unwrap_or(0);
        self.turn = (at + 1) % active.len().max(1);
    }

    fn assert_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = ChainReactionInvariants::check_all(self)
        {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Game invariant violated");
            debug_assert!(false, "Game invariant violated: {descriptions}");
        }
    }
}

impl Playable for Game {
    type Action = Position;
    type Seat = PlayerId;

    fn actions(&self) -> Vec<Position> {
        self.board.positions().collect()
    }

    fn try_play(&mut self, action: Position) -> bool {
        match self.current_player() {
            Some(player) => self.play(action, player).is_ok(),
            None => false,
        }
    }

    fn to_move(&self) -> Option<PlayerId> {
        self.current_player()
    }

    fn is_over(&self) -> bool {
        Game::is_over(self)
    }

    fn winner(&self) -> Option<PlayerId> {
        Game::winner(self)
    }

    fn is_active(&self, seat: PlayerId) -> bool {
        self.roster.is_active(seat)
    }
}
