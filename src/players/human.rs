//! Human player reading moves from a line-oriented input.

use super::Player;
use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use tictactoe_rules::{Board, Mark, Position};
use tracing::debug;

/// Human player answering prompts on `input`.
///
/// Accepts a keypad number (1-9, as shown on the board) or a cell label
/// such as `center`. Unparsable or occupied choices are re-prompted.
#[derive(derive_new::new)]
pub struct HumanPlayer<R, W> {
    #[new(into)]
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Reads one trimmed line; errors on end of input.
    ///
    /// Bytes that are not UTF-8 become replacement characters, so a garbled
    /// line is answered like any other unrecognised one.
    pub fn read_line(&mut self) -> Result<String> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            bail!("Input closed");
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    /// Asks a yes/no question until answered.
    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        loop {
            write!(self.output, "{question} [y/n] ")?;
            self.output.flush()?;
            match self.read_line()?.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }

    /// Writer the player prompts on.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn get_move(&mut self, board: &Board, me: Mark) -> Result<Position> {
        loop {
            write!(self.output, "{} ({me}), your move [1-9]: ", self.name)?;
            self.output.flush()?;
            let answer = self.read_line()?;

            match Position::from_label_or_number(&answer) {
                Some(pos) if board.is_empty(pos) => {
                    debug!(player = %self.name, %pos, "Human chose position");
                    return Ok(pos);
                }
                Some(pos) => writeln!(self.output, "{} is taken.", pos.label())?,
                None => writeln!(self.output, "\"{answer}\" is not a cell.")?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
