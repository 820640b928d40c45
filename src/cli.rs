//! Command-line interface for chain_reaction.

use crate::config::EvaluatorKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Chain Reaction - capture the board one explosion at a time
#[derive(Parser, Debug)]
#[command(name = "chain_reaction")]
#[command(about = "Chain Reaction board game with a search-based opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Session configuration file (defaults apply when it is missing)
    #[arg(short, long, global = true, default_value = "chain_reaction.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively with the configured roster
    Play {
        /// Board rows (overrides the config file)
        #[arg(long)]
        rows: Option<usize>,

        /// Board columns (overrides the config file)
        #[arg(long)]
        cols: Option<usize>,

        /// Disable ANSI colors
        #[arg(long)]
        no_color: bool,
    },

    /// Let computer players play each other
    Selfplay {
        /// Board rows
        #[arg(long, default_value = "5")]
        rows: usize,

        /// Board columns
        #[arg(long, default_value = "5")]
        cols: usize,

        /// Number of computer players (1-6)
        #[arg(short, long, default_value = "2")]
        players: usize,

        /// Search depth in plies
        #[arg(short, long, default_value = "2")]
        depth: u32,

        /// Cutoff scoring
        #[arg(long, default_value = "neutral")]
        evaluator: EvaluatorKind,

        /// Rounds to play
        #[arg(long, default_value = "1")]
        rounds: usize,

        /// Write the moves of every round to this JSON file
        #[arg(long)]
        json: Option<PathBuf>,

        /// Disable ANSI colors
        #[arg(long)]
        no_color: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_overrides() {
        let cli = Cli::try_parse_from(["chain_reaction", "play", "--rows", "4", "--no-color"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("chain_reaction.toml"));
        assert!(matches!(
            cli.command,
            Command::Play {
                rows: Some(4),
                cols: None,
                no_color: true
            }
        ));
    }

    #[test]
    fn test_selfplay_flags() {
        let cli = Cli::try_parse_from([
            "chain_reaction",
            "selfplay",
            "--evaluator",
            "material",
            "-d",
            "3",
            "--json",
            "out.json",
            "--config",
            "other.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        let Command::Selfplay {
            evaluator,
            depth,
            json,
            players,
            ..
        } = cli.command
        else {
            panic!("expected selfplay");
        };
        assert_eq!(evaluator, EvaluatorKind::Material);
        assert_eq!(depth, 3);
        assert_eq!(players, 2);
        assert_eq!(json, Some(PathBuf::from("out.json")));
    }
}
