//! Events produced by successful moves.

use crate::player::Player;
use serde::Serialize;

/// Something that happened as the result of a move
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// A player claimed a cell
    MarkPlaced {
        player: Player,
        row: usize,
        col: usize,
    },

    /// The move completed a line
    GameWon { player: Player },

    /// The move filled the board without completing a line
    GameDrawn,
}
