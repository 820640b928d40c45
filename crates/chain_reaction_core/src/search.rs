//! Depth-limited minimax with alpha-beta pruning.
//!
//! The engine never mutates the position it is given. Every explored branch
//! works on its own clone, so siblings cannot observe each other's moves.
//! Scores are always from the point of view of the player to move at the
//! root (the searcher): the searcher's layers maximize, every other seat
//! minimizes.

use super::{Game, PlayerId};
use derive_getters::Getters;
use tracing::{debug, instrument};

/// Score of a position the searcher has won.
pub const WIN_SCORE: i32 = 1_000_000;

/// Score of a position the searcher has lost.
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// A turn-based game the engine can search.
pub trait Playable: Clone {
    /// A candidate move.
    type Action: Copy + std::fmt::Debug;
    /// A player handle.
    type Seat: Copy + Eq + std::fmt::Debug;

    /// Candidate moves in enumeration order, legal or not.
    fn actions(&self) -> Vec<Self::Action>;

    /// Plays `action` for the side to move; false (and no change) if illegal.
    fn try_play(&mut self, action: Self::Action) -> bool;

    /// Side to move, if any.
    fn to_move(&self) -> Option<Self::Seat>;

    /// Whether the game has ended.
    fn is_over(&self) -> bool;

    /// The winner of a finished game.
    fn winner(&self) -> Option<Self::Seat>;

    /// Whether `seat` is still in the game.
    fn is_active(&self, seat: Self::Seat) -> bool;
}

/// Static evaluation of a non-terminal position at the depth cutoff.
pub trait Evaluator<G: Playable> {
    /// Score of `state` for `seat`. Clamped strictly inside the win/loss sentinels.
    fn evaluate(&self, state: &G, seat: G::Seat) -> i32;
}

/// Scores every non-terminal position as even.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neutral;

impl<G: Playable> Evaluator<G> for Neutral {
    fn evaluate(&self, _state: &G, _seat: G::Seat) -> i32 {
        0
    }
}

/// Token differential: the seat's tokens minus all opponents' tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Material;

impl Evaluator<Game> for Material {
    fn evaluate(&self, game: &Game, seat: PlayerId) -> i32 {
        let roster = game.roster();
        let mine = i64::from(roster.tokens(seat));
        let theirs = i64::from(roster.total_tokens()) - mine;
        let spread = (mine - theirs).clamp(i64::from(LOSS_SCORE + 1), i64::from(WIN_SCORE - 1));
        i32::try_from(spread).unwrap_or_default()
    }
}

/// Result of a root search.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new)]
pub struct SearchReport<A> {
    /// First move reaching the best score, `None` without legal moves.
    best: Option<A>,
    /// Minimax value of the root for the searcher.
    score: i32,
    /// Positions visited.
    nodes: u64,
    /// Sibling scans abandoned by a cutoff.
    cutoffs: u64,
}

#[derive(Debug, Default)]
struct Stats {
    nodes: u64,
    cutoffs: u64,
}

/// Alpha-beta search engine.
#[derive(Debug, Clone, Getters)]
pub struct AlphaBeta<E> {
    /// Plies to look ahead.
    depth: u32,
    /// Scores positions at the depth cutoff.
    evaluator: E,
    /// When false, every sibling is explored (plain minimax).
    pruning: bool,
}

impl<E> AlphaBeta<E> {
    /// Creates an engine searching `depth` plies with pruning enabled.
    pub fn new(depth: u32, evaluator: E) -> Self {
        Self {
            depth,
            evaluator,
            pruning: true,
        }
    }

    /// Enables or disables pruning. Disabling it never changes the score.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Searches from `state` for the side to move.
    #[instrument(skip_all, fields(depth = self.depth, pruning = self.pruning))]
    pub fn search<G>(&self, state: &G) -> SearchReport<G::Action>
    where
        G: Playable,
        E: Evaluator<G>,
    {
        let mut stats = Stats::default();
        let mut best = None;
        let score = match state.to_move() {
            Some(searcher) => self.alpha_beta(
                state,
                searcher,
                LOSS_SCORE - 1,
                WIN_SCORE + 1,
                self.depth,
                Some(&mut best),
                &mut stats,
            ),
            None => 0,
        };
        debug!(?best, score, nodes = stats.nodes, cutoffs = stats.cutoffs, "Search finished");
        SearchReport::new(best, score, stats.nodes, stats.cutoffs)
    }

    /// Terminal or cutoff score of `state` for `searcher`.
    fn score<G>(&self, state: &G, searcher: G::Seat) -> i32
    where
        G: Playable,
        E: Evaluator<G>,
    {
        if !state.is_active(searcher) {
            return LOSS_SCORE;
        }
        if state.is_over() {
            return if state.winner() == Some(searcher) {
                WIN_SCORE
            } else {
                LOSS_SCORE
            };
        }
        self.evaluator
            .evaluate(state, searcher)
            .clamp(LOSS_SCORE + 1, WIN_SCORE - 1)
    }

    #[allow(clippy::too_many_arguments)]
    fn alpha_beta<G>(
        &self,
        state: &G,
        searcher: G::Seat,
        mut alpha: i32,
        mut beta: i32,
        depth: u32,
        mut root_best: Option<&mut Option<G::Action>>,
        stats: &mut Stats,
    ) -> i32
    where
        G: Playable,
        E: Evaluator<G>,
    {
        stats.nodes += 1;
        if depth == 0 || state.is_over() || !state.is_active(searcher) {
            return self.score(state, searcher);
        }
        let Some(to_move) = state.to_move() else {
            return self.score(state, searcher);
        };
        let maximizing = to_move == searcher;

        let mut best: Option<i32> = None;
        for action in state.actions() {
            let mut child = state.clone();
            if !child.try_play(action) {
                continue;
            }
            let value = self.alpha_beta(&child, searcher, alpha, beta, depth - 1, None, stats);

            if maximizing {
                if best.is_none_or(|b| value > b) {
                    best = Some(value);
                    if let Some(slot) = root_best.as_deref_mut() {
                        *slot = Some(action);
                    }
                }
                alpha = alpha.max(value);
            } else {
                if best.is_none_or(|b| value < b) {
                    best = Some(value);
                }
                beta = beta.min(value);
            }

            if self.pruning && beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }

        best.unwrap_or_else(|| self.score(state, searcher))
    }
}
