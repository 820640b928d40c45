//! Move sources: console prompts and alpha-beta search.

mod computer;
mod human;

pub use computer::SearchStrategy;
pub use human::HumanStrategy;

use crate::Console;
use crate::config::{EvaluatorKind, PlayerConfig, PlayerKind};
use anyhow::Result;
use chain_reaction_core::{AlphaBeta, Game, Material, Neutral, Position};

/// What a player decided to do on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Place a token.
    Place(Position),
    /// Abandon the round.
    Quit,
}

/// Chooses moves for one seat.
pub trait Strategy {
    /// Picks the next move for the current player of `game`.
    ///
    /// `label` is the player's display name, already colored if enabled.
    fn choose(&mut self, game: &Game, label: &str, console: &mut Console<'_>) -> Result<Choice>;

    /// Whether a person is behind this seat.
    fn is_human(&self) -> bool;
}

/// Builds the strategy a seat's configuration asks for.
pub fn strategy_for(player: &PlayerConfig) -> Box<dyn Strategy> {
    match (player.kind(), player.evaluator()) {
        (PlayerKind::Human, _) => Box::new(HumanStrategy),
        (PlayerKind::Computer, EvaluatorKind::Neutral) => {
            Box::new(SearchStrategy::new(AlphaBeta::new(*player.depth(), Neutral)))
        }
        (PlayerKind::Computer, EvaluatorKind::Material) => {
            Box::new(SearchStrategy::new(AlphaBeta::new(*player.depth(), Material)))
        }
    }
}
