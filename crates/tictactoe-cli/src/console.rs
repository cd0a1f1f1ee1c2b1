//! Text console front end: prompts, input parsing and the turn loop.

use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;
use thiserror::Error;
use tictactoe_core::{Game, GameStatus, Player};
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input closed before the game finished")]
    InputClosed,
}

/// A console session reading moves from `input` and drawing to `output`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    /// Play `game` to completion, re-prompting on bad input and illegal moves.
    pub fn play(&mut self, game: &mut Game) -> Result<GameStatus, ConsoleError> {
        let size = game.board().size();
        info!(size, "Game started");

        while !game.status().is_terminal() {
            writeln!(self.output, "{}", game.board())?;

            let player = game.get_current_player();
            let row = self.read_index(player, "row", size)?;
            let col = self.read_index(player, "col", size)?;

            match game.make_move(row, col) {
                Ok(events) => {
                    for event in events {
                        debug!(?event, "Move applied");
                    }
                }
                Err(e) => {
                    debug!(player = %player, row, col, error = %e, "Move rejected");
                    writeln!(self.output, "{}", e)?;
                }
            }
        }

        writeln!(self.output, "{}", game.board())?;
        match game.get_winner() {
            Some(winner) => writeln!(self.output, "Player {} wins!", winner)?,
            None => writeln!(self.output, "It's a draw!")?,
        }
        self.output.flush()?;

        let status = game.status();
        info!(?status, turns = game.turn_number(), "Game finished");
        Ok(status)
    }

    /// Prompt until an integer is entered.
    ///
    /// Negative or oversized integers map to an index past any board edge so
    /// that the board rejects them as an invalid position.
    fn read_index(&mut self, player: Player, axis: &str, size: usize) -> Result<usize, ConsoleError> {
        write!(
            self.output,
            "Player {} enter {} (0-{}): ",
            player,
            axis,
            size.saturating_sub(1)
        )?;
        self.output.flush()?;

        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ConsoleError::InputClosed);
            }

            match line.trim().parse::<i64>() {
                Ok(value) => return Ok(usize::try_from(value).unwrap_or(usize::MAX)),
                Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                    return Ok(usize::MAX);
                }
                Err(_) => {
                    debug!(input = line.trim(), "Not a number");
                    write!(self.output, "Invalid input, enter a number: ")?;
                    self.output.flush()?;
                }
            }
        }
    }
}
