//! Tic-tac-toe on an N x N board.
//!
//! This crate provides the core game logic:
//! - Player identities with their display symbols
//! - Board representation with move validation and win detection
//! - Game state machine with strict turn alternation
//!
//! A line only counts when it spans the whole board, so a 4x4 game needs
//! four in a row. Input and output live outside this crate; the `tictactoe`
//! binary provides a console front end.
//!
//! # Modules
//!
//! - [`player`]: Player identity and symbol
//! - [`board`]: Grid state, legality checks, win detection, rendering
//! - [`game`]: Turn order and termination
//! - [`events`]: Outcomes reported by successful moves

pub mod board;
pub mod events;
pub mod game;
pub mod player;

// Re-export commonly used types
pub use board::{Board, BoardError, Cell, DEFAULT_SIZE};
pub use events::GameEvent;
pub use game::{Game, GameError, GameStatus};
pub use player::{Player, PlayerError, PlayerId};
