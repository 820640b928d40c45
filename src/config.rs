//! Session configuration loaded from TOML.

use chain_reaction_core::{PlayerId, TokenColor};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Most players a session seats; one palette color each.
pub const MAX_PLAYERS: usize = 6;

/// Who picks a seat's moves.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Moves typed at the console.
    #[default]
    Human,
    /// Moves chosen by alpha-beta search.
    Computer,
}

/// Cutoff scoring for computer seats.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EvaluatorKind {
    /// Every unfinished position scores zero.
    #[default]
    Neutral,
    /// Token differential.
    Material,
}

/// One seat in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name.
    name: String,

    /// Human or computer.
    #[serde(default)]
    kind: PlayerKind,

    /// Search depth in plies (computer seats).
    #[serde(default = "default_depth")]
    depth: u32,

    /// Cutoff scoring (computer seats).
    #[serde(default)]
    evaluator: EvaluatorKind,
}

impl PlayerConfig {
    /// A human seat.
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Human,
            depth: default_depth(),
            evaluator: EvaluatorKind::default(),
        }
    }

    /// A computer seat searching `depth` plies.
    pub fn computer(name: impl Into<String>, depth: u32, evaluator: EvaluatorKind) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Computer,
            depth,
            evaluator,
        }
    }
}

/// Board size, color flag and roster for a run of rounds.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Board rows.
    #[serde(default = "default_rows")]
    rows: usize,

    /// Board columns.
    #[serde(default = "default_cols")]
    cols: usize,

    /// ANSI colors in board and names.
    #[serde(default = "default_color")]
    color: bool,

    /// Seats in turn order.
    #[serde(default = "default_players")]
    players: Vec<PlayerConfig>,
}

fn default_rows() -> usize {
    5
}

fn default_cols() -> usize {
    5
}

fn default_color() -> bool {
    true
}

fn default_depth() -> u32 {
    3
}

#[instrument]
fn default_players() -> Vec<PlayerConfig> {
    vec![PlayerConfig::human("Player 1"), PlayerConfig::human("Player 2")]
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            color: default_color(),
            players: default_players(),
        }
    }
}

impl SessionConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// See [`SessionConfig::validate`].
    #[track_caller]
    pub fn new(
        rows: usize,
        cols: usize,
        color: bool,
        players: Vec<PlayerConfig>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            rows,
            cols,
            color,
            players,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(
            rows = config.rows,
            cols = config.cols,
            players = config.players.len(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the board size where given.
    ///
    /// # Errors
    ///
    /// Rejects a zero dimension.
    #[track_caller]
    pub fn with_board(mut self, rows: Option<usize>, cols: Option<usize>) -> Result<Self, ConfigError> {
        self.rows = rows.unwrap_or(self.rows);
        self.cols = cols.unwrap_or(self.cols);
        self.validate()?;
        Ok(self)
    }

    /// Turns ANSI colors off.
    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }

    /// Checks dimensions, roster size, names and search depths.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] describing the first problem found.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::new(format!(
                "Board must be at least 1x1, got {}x{}",
                self.rows, self.cols
            )));
        }
        if !(1..=MAX_PLAYERS).contains(&self.players.len()) {
            return Err(ConfigError::new(format!(
                "Number of players must be between 1 and {}, got {}",
                MAX_PLAYERS,
                self.players.len()
            )));
        }
        for (seat, player) in self.players.iter().enumerate() {
            if player.name.trim().is_empty() {
                return Err(ConfigError::new(format!("Player {} has an empty name", seat + 1)));
            }
            if player.kind == PlayerKind::Computer && player.depth == 0 {
                return Err(ConfigError::new(format!(
                    "Computer player {:?} needs a search depth of at least 1",
                    player.name
                )));
            }
            TokenColor::for_player(PlayerId(seat as u8))
                .map_err(|e| ConfigError::new(e.to_string()))?;
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        debug!(%message, file = loc.file(), line = loc.line(), "Config error");
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.players().len(), 2);
        assert_eq!(config.players()[0].kind(), &PlayerKind::Human);
    }

    #[test]
    fn test_roster_bounds() {
        assert!(SessionConfig::new(3, 3, false, vec![]).is_err());
        let seven = (1..=7).map(|i| PlayerConfig::human(format!("P{i}"))).collect();
        let err = SessionConfig::new(3, 3, false, seven).unwrap_err();
        assert!(err.message.contains("between 1 and 6"));
        let six = (1..=6).map(|i| PlayerConfig::human(format!("P{i}"))).collect();
        assert!(SessionConfig::new(3, 3, false, six).is_ok());
    }

    #[test]
    fn test_zero_depth_computer_rejected() {
        let players = vec![
            PlayerConfig::human("Ann"),
            PlayerConfig::computer("Bot", 0, EvaluatorKind::Neutral),
        ];
        assert!(SessionConfig::new(3, 3, false, players).is_err());
    }

    #[test]
    fn test_error_records_caller_location() {
        let err = SessionConfig::default().with_board(Some(0), None).unwrap_err();
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: Board must be at least 1x1"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: SessionConfig = toml::from_str(
            r#"
            rows = 4

            [[players]]
            name = "Ann"

            [[players]]
            name = "Bot"
            kind = "computer"
            evaluator = "material"
            "#,
        )
        .unwrap();
        assert_eq!((config.rows(), config.cols()), (&4, &5));
        assert_eq!(config.players()[1].kind(), &PlayerKind::Computer);
        assert_eq!(config.players()[1].depth(), &3);
        assert_eq!(config.players()[1].evaluator(), &EvaluatorKind::Material);
    }
}
