//! The grid of cells and chain-reaction resolution.
//!
//! Cells live in a flat arena indexed row-major; neighbor sets are arena
//! indices fixed at construction. Cloning a board therefore yields a fully
//! independent copy, which is what the search engine relies on.

use super::action::MoveError;
use super::cell::{Cell, Neighbors};
use super::{PlayerId, Position, Roster};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Rows × cols grid of cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    pub(crate) cells: Vec<Cell>,
}

/// Summary of one placement's cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters)]
pub struct Placement {
    /// Cells that exploded.
    explosions: u32,
    /// Opposing tokens captured.
    captured: u32,
}

/// One pending explosion on the cascade stack.
#[derive(Debug, Clone, Copy)]
struct Frame {
    cell: usize,
    mover: PlayerId,
    next: usize,
}

impl Board {
    /// Creates an empty board and wires every cell to its orthogonal neighbors.
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let here = Position::new(row, col);
                let mut neighbors = Neighbors::default();
                let candidates = [here.up(), here.left(), Some(here.down()), Some(here.right())];
                for pos in candidates.into_iter().flatten() {
                    if pos.row < rows && pos.col < cols {
                        neighbors.push(pos.row * cols + pos.col);
                    }
                }
                cells.push(Cell::new(neighbors));
            }
        }
        Self { rows, cols, cells }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Arena index for a position, `None` when off the board.
    pub fn index(&self, pos: Position) -> Option<usize> {
        (pos.row < self.rows && pos.col < self.cols).then(|| pos.row * self.cols + pos.col)
    }

    /// Position of an arena index.
    pub fn position_of(&self, index: usize) -> Position {
        Position::new(index / self.cols, index % self.cols)
    }

    /// The cell at a position.
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let cols = self.cols;
        (0..self.rows * cols).map(move |i| Position::new(i / cols, i % cols))
    }

    /// Tokens physically on the board.
    pub fn total_tokens(&self) -> u32 {
        self.cells.iter().map(|c| c.tokens).sum()
    }

    /// Tokens in cells owned by `player`.
    pub fn tokens_owned_by(&self, player: PlayerId) -> u32 {
        self.cells
            .iter()
            .filter(|c| c.owner == Some(player))
            .map(|c| c.tokens)
            .sum()
    }

    /// Number of distinct owners with tokens on the board.
    pub fn owner_count(&self) -> usize {
        let mut owners: Vec<PlayerId> = self.cells.iter().filter_map(|c| c.owner).collect();
        owners.sort();
        owners.dedup();
        owners.len()
    }

    /// Checks whether `player` may place at `pos`, returning the arena index.
    pub fn check_placement(&self, pos: Position, player: PlayerId) -> Result<usize, MoveError> {
        let index = self.index(pos).ok_or(MoveError::OutOfBounds(pos))?;
        let cell = &self.cells[index];
        if let Some(owner) = cell.owner
            && !cell.accepts(player)
        {
            return Err(MoveError::CellOwned {
                position: pos,
                owner,
            });
        }
        Ok(index)
    }

    /// Places one token for `player` and resolves the resulting cascade.
    ///
    /// Credits the mover's tally in `roster` and transfers captured tokens
    /// between tallies. On error nothing is mutated.
    #[instrument(level = "trace", skip(self, roster))]
    pub fn place(
        &mut self,
        pos: Position,
        player: PlayerId,
        roster: &mut Roster,
    ) -> Result<Placement, MoveError> {
        let index = self.check_placement(pos, player)?;
        roster.credit(player, 1);

        let mut placement = Placement::default();
        if self.receive(index, player) {
            self.cascade(index, player, roster, &mut placement);
        }
        Ok(placement)
    }

    /// Adds one token owned by `mover` to a cell; true when it is now critical.
    fn receive(&mut self, index: usize, mover: PlayerId) -> bool {
        let cell = &mut self.cells[index];
        cell.owner.get_or_insert(mover);
        cell.tokens += 1;
        cell.is_critical()
    }

    /// Transfers an opposing cell to `mover` before it receives a token.
    fn capture(&mut self, index: usize, mover: PlayerId, roster: &mut Roster) -> u32 {
        let cell = &mut self.cells[index];
        match cell.owner {
            Some(previous) if previous != mover => {
                let taken = cell.tokens;
                roster.debit(previous, taken);
                roster.credit(mover, taken);
                cell.owner = Some(mover);
                trace!(cell = index, from = %previous, to = %mover, taken, "Captured");
                taken
            }
            _ => 0,
        }
    }

    /// Empties a critical cell, keeping any surplus beyond one token per neighbor.
    fn burst(&mut self, index: usize, mover: PlayerId) -> Frame {
        let cell = &mut self.cells[index];
        let capacity = cell.capacity();
        cell.tokens -= capacity;
        if cell.tokens == 0 {
            cell.owner = None;
        }
        Frame {
            cell: index,
            mover,
            next: 0,
        }
    }

    /// Depth-first explosion cascade starting at a critical cell.
    ///
    /// Visits neighbors in stored order; a neighbor that turns critical
    /// explodes fully before its parent's next neighbor. Chained explosions
    /// stop once no opponent owns a token, since nothing is left to capture
    /// and a saturated board would otherwise cascade forever.
    fn cascade(
        &mut self,
        origin: usize,
        mover: PlayerId,
        roster: &mut Roster,
        placement: &mut Placement,
    ) {
        let mut stack = vec![self.burst(origin, mover)];
        placement.explosions += 1;

        while let Some(top) = stack.len().checked_sub(1) {
            let Frame { cell, mover, next } = stack[top];
            let Some(neighbor) = self.cells[cell].neighbors.get(next) else {
                stack.pop();
                continue;
            };
            stack[top].next += 1;

            placement.captured += self.capture(neighbor, mover, roster);
            if self.receive(neighbor, mover) && roster.opponents_hold_tokens(mover) {
                stack.push(self.burst(neighbor, mover));
                placement.explosions += 1;
            }
        }
        trace!(
            explosions = placement.explosions,
            captured = placement.captured,
            "Cascade settled"
        );
    }
}
