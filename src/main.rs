//! Chain Reaction - terminal front end

use anyhow::Result;
use chain_reaction::{
    Cli, CliCommand, Console, EvaluatorKind, PlayerConfig, Session, SessionConfig,
};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        CliCommand::Play {
            rows,
            cols,
            no_color,
        } => run_play(&cli.config, rows, cols, no_color),
        CliCommand::Selfplay {
            rows,
            cols,
            players,
            depth,
            evaluator,
            rounds,
            json,
            no_color,
        } => run_selfplay(rows, cols, players, depth, evaluator, rounds, json, no_color),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run interactive rounds
#[instrument(skip_all, fields(config = %config_path.display()))]
fn run_play(
    config_path: &Path,
    rows: Option<usize>,
    cols: Option<usize>,
    no_color: bool,
) -> Result<()> {
    let mut config = SessionConfig::load_or_default(config_path)?.with_board(rows, cols)?;
    if no_color {
        config = config.without_color();
    }
    info!(players = config.players().len(), "Starting interactive session");

    let mut session = Session::from_config(&config)?;
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout().lock();
    session.run(&mut Console::new(&mut input, &mut output))
}

/// Run computer-only rounds
#[allow(clippy::too_many_arguments)]
#[instrument]
fn run_selfplay(
    rows: usize,
    cols: usize,
    players: usize,
    depth: u32,
    evaluator: EvaluatorKind,
    rounds: usize,
    json: Option<PathBuf>,
    no_color: bool,
) -> Result<()> {
    let roster = (1..=players)
        .map(|i| PlayerConfig::computer(format!("Computer {i}"), depth, evaluator))
        .collect();
    let config = SessionConfig::new(rows, cols, !no_color, roster)?;
    let mut session = Session::from_config(&config)?;

    let mut input = std::io::empty();
    let mut output = std::io::stdout().lock();
    session.run_unattended(rounds, &mut Console::new(&mut input, &mut output))?;

    if let Some(path) = json {
        session.write_record(&path)?;
        info!(path = %path.display(), "Selfplay record saved");
    }
    Ok(())
}
