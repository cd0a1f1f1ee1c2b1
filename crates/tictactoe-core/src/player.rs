//! Player identity.
//!
//! A player is nothing more than a stable identifier plus the symbol drawn
//! in the cells it occupies. Two players are the same player only if their
//! ids match; the symbol plays no part in equality.

use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Player identifier (0 for the first player, 1 for the second)
pub type PlayerId = u8;

/// Errors raised when constructing a player
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("Player symbol {0:?} is not a printable character")]
    InvalidSymbol(char),
}

/// A participant in the game
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Player {
    id: PlayerId,
    symbol: char,
}

impl Player {
    /// Create a new player, rejecting control and whitespace symbols
    pub fn new(id: PlayerId, symbol: char) -> Result<Self, PlayerError> {
        if symbol.is_control() || symbol.is_whitespace() {
            return Err(PlayerError::InvalidSymbol(symbol));
        }
        Ok(Self { id, symbol })
    }

    /// The player who moves first
    pub const fn cross() -> Self {
        Self { id: 0, symbol: 'X' }
    }

    /// The player who moves second
    pub const fn nought() -> Self {
        Self { id: 1, symbol: 'O' }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
