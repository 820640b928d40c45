//! Multi-round play: seats, turn loop, scores.

use crate::Console;
use crate::config::{ConfigError, SessionConfig};
use crate::players::{Choice, Strategy, strategy_for};
use crate::render::{BoardView, paint};
use anyhow::{Context, Result};
use chain_reaction_core::{Game, Move, PlayerId, TokenColor};
use derive_getters::Getters;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

pub(crate) const INVALID_MOVE: &str = "Invalid move. Try again.";

/// A seated player: identity, running score and move source.
///
/// Contenders outlive rounds; each round builds a fresh [`Game`] from them.
#[derive(Getters, derive_new::new)]
pub struct Contender {
    /// Display name.
    #[new(into)]
    name: String,
    /// Color of their tokens.
    color: TokenColor,
    /// Rounds won this session.
    #[new(value = "0")]
    score: u32,
    #[getter(skip)]
    strategy: Box<dyn Strategy>,
}

impl Contender {
    /// Whether a person is choosing this seat's moves.
    pub fn is_human(&self) -> bool {
        self.strategy.is_human()
    }
}

impl std::fmt::Debug for Contender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Contender")
            .field("name", &self.name)
            .field("color", &self.color)
            .field("score", &self.score)
            .field("human", &self.is_human())
            .finish()
    }
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum RoundOutcome {
    /// The seat was the last one standing.
    Won {
        /// Winning seat.
        seat: PlayerId,
    },
    /// The seat abandoned the round.
    Quit {
        /// Quitting seat.
        seat: PlayerId,
    },
    /// The seat had nowhere to place.
    Forfeit {
        /// Stuck seat.
        seat: PlayerId,
    },
}

/// One finished round, as written to a JSON record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct RoundRecord {
    /// Board rows.
    rows: usize,
    /// Board columns.
    cols: usize,
    /// Names in seat order.
    players: Vec<String>,
    /// Every accepted move.
    moves: Vec<Move>,
    /// Result.
    outcome: RoundOutcome,
}

/// A roster playing consecutive rounds on one board size.
#[derive(Debug, Getters)]
pub struct Session {
    /// Board rows.
    rows: usize,
    /// Board columns.
    cols: usize,
    /// ANSI colors enabled.
    color: bool,
    /// Seats in turn order.
    contenders: Vec<Contender>,
    /// Finished rounds.
    rounds: Vec<RoundRecord>,
}

impl Session {
    /// Seats the configured roster.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid.
    #[instrument(skip_all, fields(players = config.players().len()))]
    pub fn from_config(config: &SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let contenders = config
            .players()
            .iter()
            .enumerate()
            .map(|(seat, player)| {
                let seat = u8::try_from(seat)
                    .map_err(|_| ConfigError::new(format!("Seat {seat} out of range")))?;
                let color = TokenColor::for_player(PlayerId(seat))
                    .map_err(|e| ConfigError::new(e.to_string()))?;
                Ok(Contender::new(player.name().clone(), color, strategy_for(player)))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        info!(rows = config.rows(), cols = config.cols(), "Session ready");
        Ok(Self {
            rows: *config.rows(),
            cols: *config.cols(),
            color: *config.color(),
            contenders,
            rounds: Vec::new(),
        })
    }

    /// A seat's name, colored when colors are on.
    pub fn label(&self, seat: PlayerId) -> String {
        match self.contenders.get(seat.seat()) {
            Some(contender) => paint(&contender.name, contender.color, self.color),
            None => seat.to_string(),
        }
    }

    /// Plays one round to a win, a quit or a forfeit.
    ///
    /// Rejected moves are reported and the same player is asked again.
    #[instrument(skip_all, fields(round = self.rounds.len() + 1))]
    pub fn play_round(&mut self, console: &mut Console<'_>) -> Result<RoundOutcome> {
        let mut game = Game::new(self.rows, self.cols, self.contenders.len())?;
        console.say(BoardView::new(game.board(), self.color))?;

        let outcome = loop {
            let player = game
                .current_player()
                .context("Game has no player to move")?;
            if game.is_over() {
                break RoundOutcome::Won { seat: player };
            }

            let label = self.label(player);
            if game.legal_moves(player).is_empty() {
                console.say(format!("{label} has no legal move and forfeits the round."))?;
                break RoundOutcome::Forfeit { seat: player };
            }

            let strategy = &mut self.contenders[player.seat()].strategy;
            match strategy.choose(&game, &label, console)? {
                Choice::Quit => {
                    console.say("The game was quit.")?;
                    break RoundOutcome::Quit { seat: player };
                }
                Choice::Place(position) => match game.play(position, player) {
                    Ok(result) => {
                        console.say("Placed ball.")?;
                        for &out in result.eliminated() {
                            console.say(format!("{} has been eliminated.", self.label(out)))?;
                        }
                        console.say(BoardView::new(game.board(), self.color))?;
                    }
                    Err(e) => {
                        debug!(error = %e, "Move rejected");
                        console.say(INVALID_MOVE)?;
                    }
                },
            }
        };

        match outcome {
            RoundOutcome::Won { seat } => {
                self.contenders[seat.seat()].score += 1;
                console.say(format!("Congratulations {}!", self.label(seat)))?;
                info!(winner = %seat, moves = game.history().len(), "Round won");
            }
            RoundOutcome::Quit { seat } => info!(by = %seat, "Round quit"),
            RoundOutcome::Forfeit { seat } => warn!(by = %seat, "Round forfeited"),
        }

        self.rounds.push(RoundRecord {
            rows: self.rows,
            cols: self.cols,
            players: self.contenders.iter().map(|c| c.name.clone()).collect(),
            moves: game.history().to_vec(),
            outcome,
        });
        Ok(outcome)
    }

    /// Prints every seat's score.
    pub fn print_scores(&self, console: &mut Console<'_>) -> Result<()> {
        console.say("===== SCORES =====")?;
        for (seat, contender) in self.contenders.iter().enumerate() {
            let label = self.label(PlayerId(seat as u8));
            console.say(format!("{label}: {}", contender.score))?;
        }
        Ok(())
    }

    /// Interactive loop: rounds until the players decline another.
    #[instrument(skip_all)]
    pub fn run(&mut self, console: &mut Console<'_>) -> Result<()> {
        greet(console)?;
        loop {
            self.play_round(console)?;
            self.print_scores(console)?;
            if !console.ask_yes_no("Would you like to play again? (y/n) ")? {
                break;
            }
        }
        console.say("Thanks for playing ChainReaction!")?;
        Ok(())
    }

    /// Plays `rounds` rounds back to back, then prints the scores.
    #[instrument(skip(self, console))]
    pub fn run_unattended(&mut self, rounds: usize, console: &mut Console<'_>) -> Result<()> {
        for round in 1..=rounds {
            console.say(format!("--- Round {round} ---"))?;
            self.play_round(console)?;
        }
        self.print_scores(console)
    }

    /// Writes the finished rounds as pretty JSON.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn write_record(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create record file {}", path.display()))?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), &self.rounds)
            .context("Failed to write round record")?;
        info!(rounds = self.rounds.len(), "Round record written");
        Ok(())
    }
}

fn greet(console: &mut Console<'_>) -> Result<()> {
    console.say("")?;
    console.say("\t*****************************")?;
    console.say("\t* Welcome to ChainReaction! *")?;
    console.say("\t*****************************")?;
    console.say("")?;
    Ok(())
}
