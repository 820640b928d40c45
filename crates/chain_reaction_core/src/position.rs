//! Grid coordinates.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board, zero-based.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_new::new,
)]
#[display("({row}, {col})")]
pub struct Position {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Position {
    /// Returns the position one row up, if any.
    pub fn up(self) -> Option<Self> {
        self.row.checked_sub(1).map(|row| Self { row, ..self })
    }

    /// Returns the position one column left, if any.
    pub fn left(self) -> Option<Self> {
        self.col.checked_sub(1).map(|col| Self { col, ..self })
    }

    /// Returns the position one row down (unbounded).
    pub fn down(self) -> Self {
        Self {
            row: self.row + 1,
            ..self
        }
    }

    /// Returns the position one column right (unbounded).
    pub fn right(self) -> Self {
        Self {
            col: self.col + 1,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_stop_at_origin() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.up(), None);
        assert_eq!(origin.left(), None);
        assert_eq!(origin.down(), Position::new(1, 0));
        assert_eq!(origin.right(), Position::new(0, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2, 5).to_string(), "(2, 5)");
    }
}
