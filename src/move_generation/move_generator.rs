//! Shared move-generation vocabulary and error types.
//!
//! Defines the candidate-move payload produced by full enumeration and the
//! error enum surfaced when a caller violates a rules-engine contract.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, Piece, Square};

pub type RulesResult<T> = Result<T, RulesError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    EmptySquare(Square),
    WrongTurn(Color),
    IllegalMove { from: Square, to: Square },
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::EmptySquare(square) => {
                write!(f, "no piece on square ({}, {})", square.row, square.col)
            }
            RulesError::WrongTurn(color) => {
                write!(f, "it is {color:?}'s turn to move")
            }
            RulesError::IllegalMove { from, to } => write!(
                f,
                "move ({}, {}) -> ({}, {}) is not legal",
                from.row, from.col, to.row, to.col
            ),
        }
    }
}

impl Error for RulesError {}

/// One fully legal move for a piece, as produced by whole-side enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
}
