//! Display identities for players.
//!
//! The core never renders anything; it only maps seats to a color that a
//! renderer may use.

use super::PlayerId;
use serde::{Deserialize, Serialize};

/// Terminal color assigned to a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TokenColor {
    /// Terminal default.
    Default,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Blue.
    Blue,
    /// Magenta.
    Magenta,
    /// Cyan.
    Cyan,
}

/// A color index outside the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Color index {index} is outside the palette range 0..={max}")]
pub struct PaletteError {
    /// Requested index.
    pub index: usize,
    /// Largest valid index.
    pub max: usize,
}

impl TokenColor {
    const ORDER: [TokenColor; 7] = [
        TokenColor::Default,
        TokenColor::Red,
        TokenColor::Green,
        TokenColor::Yellow,
        TokenColor::Blue,
        TokenColor::Magenta,
        TokenColor::Cyan,
    ];

    /// Color for an index in `0..=6`, where 0 is the terminal default.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError`] for any other index.
    pub fn from_index(index: usize) -> Result<Self, PaletteError> {
        Self::ORDER.get(index).copied().ok_or(PaletteError {
            index,
            max: Self::ORDER.len() - 1,
        })
    }

    /// Color for a seat: seat 0 is red, seat 5 is cyan.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError`] for seats beyond the sixth.
    pub fn for_player(player: PlayerId) -> Result<Self, PaletteError> {
        Self::from_index(player.seat() + 1)
    }

    /// ANSI SGR foreground code.
    pub fn ansi_code(self) -> u8 {
        match self {
            TokenColor::Default => 0,
            TokenColor::Red => 31,
            TokenColor::Green => 32,
            TokenColor::Yellow => 33,
            TokenColor::Blue => 34,
            TokenColor::Magenta => 35,
            TokenColor::Cyan => 36,
        }
    }
}
