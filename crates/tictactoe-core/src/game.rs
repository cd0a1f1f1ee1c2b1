//! Core game state machine.
//!
//! This module contains the `Game` struct: two fixed players taking turns on
//! one board until a line is completed or the board fills up.

use crate::board::{Board, BoardError, DEFAULT_SIZE};
use crate::events::GameEvent;
use crate::player::Player;
use serde::Serialize;
use thiserror::Error;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    /// Moves are still being accepted
    InProgress,

    /// A player completed a line
    Won { winner: Player },

    /// The board filled up with no complete line
    Drawn,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Errors that can occur when making a move
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("Game is over")]
    GameOver,
}

/// The complete game state
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    /// Index into `players` of whoever moves next
    current: usize,
    /// Number of successful moves so far
    turn_number: u32,
}

impl Game {
    /// Create a new game on an empty `size` x `size` board, X to move
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            players: [Player::cross(), Player::nought()],
            current: 0,
            turn_number: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player due to move next
    pub fn get_current_player(&self) -> Player {
        self.players[self.current]
    }

    pub fn get_winner(&self) -> Option<Player> {
        self.board.get_winner()
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Check if the game is finished (won or drawn)
    pub fn is_over(&self) -> bool {
        self.get_winner().is_some() || self.board.is_full()
    }

    pub fn status(&self) -> GameStatus {
        match self.get_winner() {
            Some(winner) => GameStatus::Won { winner },
            None if self.board.is_full() => GameStatus::Drawn,
            None => GameStatus::InProgress,
        }
    }

    /// Place the current player's mark.
    ///
    /// On error nothing changes and the same player is still to move.
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<Vec<GameEvent>, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let player = self.get_current_player();
        self.board.make_move(row, col, player)?;
        self.turn_number += 1;
        self.current = 1 - self.current;

        let mut events = vec![GameEvent::MarkPlaced { player, row, col }];
        match self.status() {
            GameStatus::Won { winner } => events.push(GameEvent::GameWon { player: winner }),
            GameStatus::Drawn => events.push(GameEvent::GameDrawn),
            GameStatus::InProgress => {}
        }

        Ok(events)
    }

    /// JSON snapshot of the full game state
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_game_starts_with_x() {
        let game = Game::default();
        assert_eq!(game.get_current_player(), Player::cross());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.turn_number(), 0);
        assert_eq!(game.board().size(), 3);
        assert!(!game.is_over());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(3);
        game.make_move(0, 0).unwrap();
        assert_eq!(game.get_current_player(), Player::nought());

        game.make_move(1, 1).unwrap();
        assert_eq!(game.get_current_player(), Player::cross());
        assert_eq!(game.turn_number(), 2);
    }

    #[test]
    fn test_illegal_move_keeps_turn() {
        let mut game = Game::new(3);
        game.make_move(0, 0).unwrap();

        let err = game.make_move(0, 0).unwrap_err();
        assert_eq!(
            err,
            GameError::Board(BoardError::PositionOccupied { row: 0, col: 0 })
        );
        assert_eq!(game.get_current_player(), Player::nought());

        assert!(matches!(
            game.make_move(7, 0),
            Err(GameError::Board(BoardError::InvalidPosition { .. }))
        ));
        assert_eq!(game.get_current_player(), Player::nought());
        assert_eq!(game.turn_number(), 1);
    }

    #[test]
    fn test_current_player_is_always_one_of_the_two() {
        let mut game = Game::new(3);
        for (r, c) in [(0, 0), (0, 0), (1, 1), (9, 9), (2, 2)] {
            let _ = game.make_move(r, c);
            let current = game.get_current_player();
            assert!(current == Player::cross() || current == Player::nought());
        }
    }

    #[test]
    fn test_move_events() {
        let mut game = Game::new(3);
        let events = game.make_move(2, 1).unwrap();
        assert_eq!(
            events,
            vec![GameEvent::MarkPlaced {
                player: Player::cross(),
                row: 2,
                col: 1
            }]
        );
    }

    #[test]
    fn test_winning_move() {
        let mut game = Game::new(3);
        // X: top row, O: middle row
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            game.make_move(r, c).unwrap();
        }
        let events = game.make_move(0, 2).unwrap();

        assert_eq!(
            events.last(),
            Some(&GameEvent::GameWon {
                player: Player::cross()
            })
        );
        assert!(game.is_over());
        assert_eq!(game.get_winner(), Some(Player::cross()));
        assert_eq!(
            game.status(),
            GameStatus::Won {
                winner: Player::cross()
            }
        );
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut game = Game::new(1);
        game.make_move(0, 0).unwrap();
        assert!(game.is_over());

        let before = game.board().clone();
        assert_eq!(game.make_move(0, 0), Err(GameError::GameOver));
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn test_status_terminal() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Drawn.is_terminal());
        assert!(GameStatus::Won {
            winner: Player::nought()
        }
        .is_terminal());
    }

    #[test]
    fn test_to_json_snapshot() {
        let mut game = Game::new(2);
        game.make_move(0, 1).unwrap();

        let json: serde_json::Value = serde_json::from_str(&game.to_json().unwrap()).unwrap();
        assert_eq!(json["turn_number"], 1);
        assert_eq!(json["current"], 1);
        assert_eq!(json["board"]["size"], 2);
        assert_eq!(json["board"]["grid"][0][0], "Empty");
        assert_eq!(json["board"]["grid"][0][1]["Occupied"]["symbol"], "X");
    }
}
