//! Player registry: seats, token tallies and elimination.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Seat handle for a player in one game. Seat order is turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", u16::from(self.0) + 1)
    }
}

impl PlayerId {
    /// Zero-based seat index.
    pub fn seat(self) -> usize {
        self.0 as usize
    }
}

/// Per-game bookkeeping for one player.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Seat handle.
    id: PlayerId,
    /// Tokens this player owns on the board.
    tokens: u32,
    /// Whether the player has placed at least one token.
    has_moved: bool,
}

impl PlayerRecord {
    fn new(id: PlayerId) -> Self {
        Self {
            id,
            tokens: 0,
            has_moved: false,
        }
    }
}

/// Tracks every seated player and which of them are still in the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    records: Vec<PlayerRecord>,
    active: Vec<PlayerId>,
}

impl Roster {
    /// Seats `count` players, all active with empty tallies.
    pub fn new(count: u8) -> Self {
        let records: Vec<_> = (0..count).map(|seat| PlayerRecord::new(PlayerId(seat))).collect();
        let active = records.iter().map(|r| r.id).collect();
        Self { records, active }
    }

    /// Active players in turn order.
    pub fn active(&self) -> &[PlayerId] {
        &self.active
    }

    /// All seated players, including eliminated ones.
    pub fn records(&self) -> &[PlayerRecord] {
        &self.records
    }

    /// Looks up a player's record.
    pub fn record(&self, player: PlayerId) -> Option<&PlayerRecord> {
        self.records.get(player.seat())
    }

    /// Whether the player is still in the game.
    pub fn is_active(&self, player: PlayerId) -> bool {
        self.active.contains(&player)
    }

    /// Token tally for a player (zero for unknown seats).
    pub fn tokens(&self, player: PlayerId) -> u32 {
        self.record(player).map_or(0, |r| r.tokens)
    }

    /// Sum of every player's tally.
    pub fn total_tokens(&self) -> u32 {
        self.records.iter().map(|r| r.tokens).sum()
    }

    /// True when any player other than `player` owns tokens on the board.
    pub fn opponents_hold_tokens(&self, player: PlayerId) -> bool {
        self.records.iter().any(|r| r.id != player && r.tokens > 0)
    }

    /// Adds tokens to a player's tally.
    pub fn credit(&mut self, player: PlayerId, amount: u32) {
        if let Some(record) = self.records.get_mut(player.seat()) {
            record.tokens += amount;
        }
    }

    /// Removes tokens from a player's tally.
    pub fn debit(&mut self, player: PlayerId, amount: u32) {
        if let Some(record) = self.records.get_mut(player.seat()) {
            debug_assert!(record.tokens >= amount, "tally underflow for {}", player);
            record.tokens = record.tokens.saturating_sub(amount);
        }
    }

    /// Records that the player has placed a token.
    pub fn mark_moved(&mut self, player: PlayerId) {
        if let Some(record) = self.records.get_mut(player.seat()) {
            record.has_moved = true;
        }
    }

    /// Removes every active player who has moved and owns no tokens.
    ///
    /// Players who have not made their first move are exempt. Returns the
    /// removed seats in turn order.
    #[instrument(skip(self))]
    pub fn eliminate(&mut self) -> Vec<PlayerId> {
        let records = &self.records;
        let (out, keep): (Vec<_>, Vec<_>) = self.active.iter().copied().partition(|id| {
            let record = &records[id.seat()];
            record.has_moved && record.tokens == 0
        });
        if !out.is_empty() {
            debug!(eliminated = ?out, remaining = keep.len(), "Players eliminated");
        }
        self.active = keep;
        out
    }
}
