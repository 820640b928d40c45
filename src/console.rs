//! Line-oriented terminal I/O.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use tracing::trace;

/// Prompt-and-read wrapper over any buffered reader and writer.
pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    /// Wraps an input and an output stream.
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Self { input, output }
    }

    /// Writes one line.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Writes `prompt` without a newline and reads the reply.
    ///
    /// Returns `None` once input is exhausted.
    pub fn prompt(&mut self, prompt: impl Display) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            trace!("Input exhausted");
            return Ok(None);
        }
        let reply = line.trim_end_matches(['\r', '\n']).to_string();
        trace!(%reply, "Read line");
        Ok(Some(reply))
    }

    /// Asks until the reply starts with `y` or `n`. End of input counts as no.
    pub fn ask_yes_no(&mut self, prompt: impl Display) -> io::Result<bool> {
        loop {
            let Some(reply) = self.prompt(&prompt)? else {
                return Ok(false);
            };
            match reply.trim_start().chars().next().map(|c| c.to_ascii_lowercase()) {
                Some('y') => return Ok(true),
                Some('n') => return Ok(false),
                _ => self.say("Please type a word that starts with 'Y' or 'N'.")?,
            }
        }
    }
}
