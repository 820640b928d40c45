//! Console-driven player.

use super::{Choice, Strategy};
use crate::Console;
use crate::command::Command;
use crate::session::INVALID_MOVE;
use anyhow::Result;
use chain_reaction_core::Game;
use tracing::{debug, instrument};

/// Reads `row,col` or `quit` from the console until one parses.
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanStrategy;

impl Strategy for HumanStrategy {
    #[instrument(skip_all)]
    fn choose(&mut self, _game: &Game, label: &str, console: &mut Console<'_>) -> Result<Choice> {
        loop {
            let Some(line) = console.prompt(format!("{label} (\"row,column\" or \"quit\"): "))?
            else {
                debug!("Input closed, treating as quit");
                return Ok(Choice::Quit);
            };
            match line.parse::<Command>() {
                Ok(Command::Quit) => return Ok(Choice::Quit),
                Ok(command) => match command.position() {
                    Some(position) => return Ok(Choice::Place(position)),
                    None => console.say(INVALID_MOVE)?,
                },
                Err(e) => {
                    debug!(error = %e, "Reprompting");
                    console.say(
                        "Invalid command format. Enter a position to place a ball\n\
                         as a row and column separated by a comma, or \"quit\" to exit.",
                    )?;
                }
            }
        }
    }

    fn is_human(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chain_reaction_core::Position;

    fn choose(script: &[u8]) -> (Choice, String) {
        let game = Game::new(3, 3, 2).unwrap();
        let mut input = script;
        let mut output = Vec::new();
        let mut console = Console::new(&mut input, &mut output);
        let choice = HumanStrategy.choose(&game, "Ann", &mut console).unwrap();
        drop(console);
        (choice, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_reprompts_on_bad_format() {
        let (choice, output) = choose(b"hello\n1,2\n");
        assert_eq!(choice, Choice::Place(Position::new(1, 2)));
        assert_eq!(output.matches("Ann (\"row,column\" or \"quit\"): ").count(), 2);
        assert!(output.contains("Invalid command format."));
    }

    #[test]
    fn test_negative_coordinates_are_invalid_moves() {
        let (choice, output) = choose(b"-1,0\nquit\n");
        assert_eq!(choice, Choice::Quit);
        assert!(output.contains(INVALID_MOVE));
    }

    #[test]
    fn test_end_of_input_quits() {
        assert_eq!(choose(b"").0, Choice::Quit);
    }
}
