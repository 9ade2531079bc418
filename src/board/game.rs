//! Game state classification and a linear game driver.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PlayError;
use crate::board::state::Board;
use crate::board::types::{Alliance, Move};

/// Where a game stands. Always derived fresh from a board, never cached
/// across positions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    WhiteToMove,
    BlackToMove,
    WhiteCheckmated,
    BlackCheckmated,
    Stalemate,
}

impl GameState {
    /// Classify a position.
    #[must_use]
    pub fn of(board: &Board) -> GameState {
        if board.is_checkmate() {
            match board.side_to_move() {
                Alliance::White => GameState::WhiteCheckmated,
                Alliance::Black => GameState::BlackCheckmated,
            }
        } else if board.is_stalemate() {
            GameState::Stalemate
        } else {
            match board.side_to_move() {
                Alliance::White => GameState::WhiteToMove,
                Alliance::Black => GameState::BlackToMove,
            }
        }
    }

    /// Returns true if no further move can be played
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameState::WhiteToMove | GameState::BlackToMove)
    }

    /// The alliance that delivered checkmate, if any
    #[inline]
    #[must_use]
    pub const fn winner(self) -> Option<Alliance> {
        match self {
            GameState::WhiteCheckmated => Some(Alliance::Black),
            GameState::BlackCheckmated => Some(Alliance::White),
            _ => None,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::WhiteToMove => write!(f, "White to move"),
            GameState::BlackToMove => write!(f, "Black to move"),
            GameState::WhiteCheckmated => write!(f, "White is checkmated"),
            GameState::BlackCheckmated => write!(f, "Black is checkmated"),
            GameState::Stalemate => write!(f, "Stalemate"),
        }
    }
}

/// A linear game: the chain of boards produced so far and the moves that
/// connect them. Every past position stays available for take-back and
/// review.
#[derive(Clone, Debug)]
pub struct Game {
    boards: Vec<Board>,
    moves: Vec<Move>,
}

impl Game {
    /// Start a game from the standard position.
    #[must_use]
    pub fn new() -> Game {
        Game::from_board(Board::standard())
    }

    /// Start a game from an arbitrary position.
    #[must_use]
    pub fn from_board(board: Board) -> Game {
        Game {
            boards: vec![board],
            moves: Vec::new(),
        }
    }

    /// The current position.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.boards.last().expect("game history is never empty")
    }

    /// Where the game stands now.
    #[must_use]
    pub fn state(&self) -> GameState {
        GameState::of(self.board())
    }

    /// Moves played so far, oldest first.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of plies played.
    #[must_use]
    pub fn ply(&self) -> usize {
        self.moves.len()
    }

    /// Every position the game has passed through, the current one last.
    #[must_use]
    pub fn history(&self) -> &[Board] {
        &self.boards
    }

    /// Play a move, advancing the game one ply.
    ///
    /// # Errors
    /// Fails with [`PlayError::GameOver`] once the game has ended, and with
    /// [`PlayError::Rejected`] when the board turns the move down.
    pub fn submit(&mut self, mv: Move) -> Result<GameState, PlayError> {
        let state = self.state();
        if state.is_over() {
            return Err(PlayError::GameOver { state });
        }

        let transition = self.board().make_move(&mv);
        let status = transition.status();
        match transition.into_board() {
            Some(next) => {
                #[cfg(feature = "logging")]
                log::debug!("played {mv} at ply {}", self.moves.len() + 1);
                self.boards.push(next);
                self.moves.push(mv);
                Ok(self.state())
            }
            None => {
                #[cfg(feature = "logging")]
                log::debug!("rejected {mv}: {status}");
                Err(PlayError::Rejected { status })
            }
        }
    }

    /// Take back the last move. Returns the move taken back, or `None` at
    /// the start of the game.
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.moves.pop()?;
        self.boards.pop();
        #[cfg(feature = "logging")]
        log::debug!("took back {mv}");
        Some(mv)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
