//! Board cells and their neighbor sets.

use crate::PlayerId;
use serde::{Deserialize, Serialize};

/// Up to four orthogonal neighbors, stored as arena indices.
///
/// Order is fixed at construction: up, left, down, right (absent ones
/// skipped). Cascades visit neighbors in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Neighbors {
    slots: [usize; 4],
    len: u8,
}

impl Neighbors {
    pub(crate) fn push(&mut self, index: usize) {
        self.slots[self.len as usize] = index;
        self.len += 1;
    }

    /// Number of neighbors.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// True for a cell with no neighbors (1×1 board).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Neighbor at `i` in visiting order.
    pub fn get(&self, i: usize) -> Option<usize> {
        self.as_slice().get(i).copied()
    }

    /// Neighbors in visiting order.
    pub fn as_slice(&self) -> &[usize] {
        &self.slots[..self.len as usize]
    }
}

/// One grid position: its neighbors, token count and owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) neighbors: Neighbors,
    pub(crate) tokens: u32,
    pub(crate) owner: Option<PlayerId>,
}

impl Cell {
    pub(crate) fn new(neighbors: Neighbors) -> Self {
        Self {
            neighbors,
            tokens: 0,
            owner: None,
        }
    }

    /// Tokens the cell holds before it explodes.
    pub fn capacity(&self) -> u32 {
        self.neighbors.len() as u32
    }

    /// Current token count.
    pub fn tokens(&self) -> u32 {
        self.tokens
    }

    /// Owning player, `None` when empty.
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Neighbor indices in visiting order.
    pub fn neighbors(&self) -> &Neighbors {
        &self.neighbors
    }

    /// Whether `player` may place a token here.
    pub fn accepts(&self, player: PlayerId) -> bool {
        self.owner.is_none_or(|owner| owner == player)
    }

    /// Whether the token count has reached capacity. Capacity-0 cells never do.
    pub fn is_critical(&self) -> bool {
        self.capacity() > 0 && self.tokens >= self.capacity()
    }
}
