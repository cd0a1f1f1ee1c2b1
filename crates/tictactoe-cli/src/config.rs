//! Command-line and environment configuration.

use clap::Parser;
use tictactoe_core::DEFAULT_SIZE;

#[derive(Debug, Parser)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on an N x N board")]
pub struct Config {
    /// Number of rows and columns on the board
    #[arg(long, short, env = "TICTACTOE_SIZE", default_value_t = DEFAULT_SIZE, value_parser = parse_size)]
    pub size: usize,

    /// Print the final game state as JSON once the game ends
    #[arg(long)]
    pub json: bool,
}

fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a board size", s))?;
    if size == 0 {
        return Err("board size must be at least 1".to_string());
    }
    Ok(size)
}
