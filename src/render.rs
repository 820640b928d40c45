//! ASCII board and colored player names.

use chain_reaction_core::{Board, PlayerId, TokenColor};
use crossterm::style::{Color, Stylize, style};
use std::fmt;

/// Terminal color for a palette entry.
pub fn terminal_color(color: TokenColor) -> Color {
    match color {
        TokenColor::Default => Color::Reset,
        TokenColor::Red => Color::DarkRed,
        TokenColor::Green => Color::DarkGreen,
        TokenColor::Yellow => Color::DarkYellow,
        TokenColor::Blue => Color::DarkBlue,
        TokenColor::Magenta => Color::DarkMagenta,
        TokenColor::Cyan => Color::DarkCyan,
    }
}

/// Wraps `text` in the player's color when `enabled`.
pub fn paint(text: impl fmt::Display, color: TokenColor, enabled: bool) -> String {
    if enabled {
        style(text).with(terminal_color(color)).to_string()
    } else {
        text.to_string()
    }
}

fn seat_color(player: PlayerId) -> TokenColor {
    TokenColor::for_player(player).unwrap_or(TokenColor::Default)
}

/// Grid view of a board:
///
/// ```text
///  ___ ___
/// | 1 |   |
/// |___|___|
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    color: bool,
}

impl<'a> BoardView<'a> {
    /// A view that colors tokens by owner when `color` is set.
    pub fn new(board: &'a Board, color: bool) -> Self {
        Self { board, color }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.board.cols();
        writeln!(f, "{}", " ___".repeat(cols))?;

        for row in self.board.cells().chunks(cols.max(1)) {
            write!(f, "|")?;
            for cell in row {
                let Some(owner) = cell.owner() else {
                    write!(f, "   |")?;
                    continue;
                };
                if self.color {
                    let mut count = style(cell.tokens()).with(terminal_color(seat_color(owner)));
                    if cell.capacity() > 0 && cell.tokens() >= cell.capacity() {
                        count = count.bold();
                    }
                    write!(f, " {count} |")?;
                } else {
                    write!(f, " {} |", cell.tokens())?;
                }
            }
            writeln!(f)?;
            writeln!(f, "|{}", "___|".repeat(cols))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chain_reaction_core::{Game, Position};

    #[test]
    fn test_empty_board_layout() {
        let game = Game::new(2, 3, 2).unwrap();
        let text = BoardView::new(game.board(), false).to_string();
        assert_eq!(
            text,
            " ___ ___ ___\n|   |   |   |\n|___|___|___|\n|   |   |   |\n|___|___|___|\n"
        );
    }

    #[test]
    fn test_plain_counts_after_moves() {
        let mut game = Game::new(2, 2, 2).unwrap();
        game.play(Position::new(0, 1), PlayerId(0)).unwrap();
        game.play(Position::new(1, 0), PlayerId(1)).unwrap();
        let text = BoardView::new(game.board(), false).to_string();
        assert_eq!(text, " ___ ___\n|   | 1 |\n|___|___|\n| 1 |   |\n|___|___|\n");
    }

    #[test]
    fn test_colored_view_keeps_grid() {
        let mut game = Game::new(2, 2, 2).unwrap();
        game.play(Position::new(0, 0), PlayerId(0)).unwrap();
        let text = BoardView::new(game.board(), true).to_string();
        assert!(text.starts_with(" ___ ___\n| "));
        assert!(text.contains('1'));
        assert_eq!(text.lines().count(), 5);
        assert_eq!(paint("Ann", TokenColor::Red, false), "Ann");
        assert!(paint("Ann", TokenColor::Red, true).contains("Ann"));
    }
}
