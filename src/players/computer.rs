//! Search-driven player.

use super::{Choice, Strategy};
use crate::Console;
use anyhow::{Result, bail};
use chain_reaction_core::{AlphaBeta, Evaluator, Game};
use tracing::{info, instrument};

/// Plays the move alpha-beta search rates best.
#[derive(Debug, Clone)]
pub struct SearchStrategy<E> {
    engine: AlphaBeta<E>,
}

impl<E> SearchStrategy<E> {
    /// Wraps a configured engine.
    pub fn new(engine: AlphaBeta<E>) -> Self {
        Self { engine }
    }
}

impl<E: Evaluator<Game>> Strategy for SearchStrategy<E> {
    #[instrument(skip_all, fields(depth = self.engine.depth()))]
    fn choose(&mut self, game: &Game, label: &str, console: &mut Console<'_>) -> Result<Choice> {
        let report = self.engine.search(game);
        let Some(position) = *report.best() else {
            bail!("Search found no move for {label}");
        };
        info!(
            %position,
            score = report.score(),
            nodes = report.nodes(),
            cutoffs = report.cutoffs(),
            "Computer move chosen"
        );
        console.say(format!("{label} places a ball at {position}."))?;
        Ok(Choice::Place(position))
    }

    fn is_human(&self) -> bool {
        false
    }
}
