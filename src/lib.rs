//! Chain Reaction at the terminal.
//!
//! Game rules and search live in [`chain_reaction_core`]; this crate adds
//! everything around them.
//!
//! # Architecture
//!
//! - **Config**: TOML roster and board size, validated seat bounds
//! - **Players**: [`Strategy`] implementations for console input and alpha-beta search
//! - **Session**: round loop, score tally, JSON round records
//! - **Render**: ASCII board with per-player colors
//!
//! # Example
//!
//! ```
//! use chain_reaction::{Console, EvaluatorKind, PlayerConfig, Session, SessionConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let players = vec![
//!     PlayerConfig::computer("North", 2, EvaluatorKind::Neutral),
//!     PlayerConfig::computer("South", 2, EvaluatorKind::Material),
//! ];
//! let config = SessionConfig::new(3, 3, false, players)?;
//! let mut session = Session::from_config(&config)?;
//!
//! let mut input: &[u8] = b"";
//! let mut output = Vec::new();
//! session.run_unattended(1, &mut Console::new(&mut input, &mut output))?;
//! assert_eq!(session.rounds().len(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod config;
mod console;
mod players;
mod render;
mod session;

pub use cli::{Cli, Command as CliCommand};
pub use command::{Command, CommandError};
pub use config::{ConfigError, EvaluatorKind, MAX_PLAYERS, PlayerConfig, PlayerKind, SessionConfig};
pub use console::Console;
pub use players::{Choice, HumanStrategy, SearchStrategy, Strategy, strategy_for};
pub use render::{BoardView, paint, terminal_color};
pub use session::{Contender, RoundOutcome, RoundRecord, Session};
