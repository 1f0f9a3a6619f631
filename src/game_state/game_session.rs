//! Session-level game state: the board, the move history, and whose turn it
//! is. The session is the single owner of the shared history sequence; move
//! execution hands records back and the session appends them, so hypothetical
//! executions can never leak into the log.

use crate::engines::engine_trait::{play_engine_move, Engine};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, GameStatus, PieceKind, Square};
use crate::move_generation::legal_move_apply::{apply_move, ExecutionMode};
use crate::move_generation::legal_move_generator::{game_status, possible_moves};
use crate::move_generation::move_generator::{RulesError, RulesResult};
use crate::moves::move_descriptions::{captured_pieces, CapturedPieces, MoveRecord};

pub struct GameSession {
    board: Board,
    history: Vec<MoveRecord>,
    side_to_move: Color,
}

impl GameSession {
    /// A fresh game from the standard starting position, white to move.
    pub fn new() -> Self {
        Self {
            board: Board::new_game(),
            history: Vec::new(),
            side_to_move: Color::White,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Legal destinations for the piece on `from`; empty for empty squares.
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        possible_moves(&self.board, from, &self.history)
    }

    /// Validate and commit one move for the side to move. The caller decides
    /// `promotion` before calling (the controller prompts when a pawn reaches
    /// the far rank); supplying it for any other move is a harmless no-op.
    pub fn play_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> RulesResult<MoveRecord> {
        let piece = self.board.piece_at(from).ok_or(RulesError::EmptySquare(from))?;
        if piece.color != self.side_to_move {
            return Err(RulesError::WrongTurn(self.side_to_move));
        }
        if !self.legal_moves(from).contains(&to) {
            return Err(RulesError::IllegalMove { from, to });
        }

        let (next, record) = apply_move(&self.board, from, to, promotion, ExecutionMode::Real)?;
        self.board = next;
        self.history.push(record.clone());
        self.side_to_move = self.side_to_move.opposite();
        Ok(record)
    }

    /// Let `engine` play the current turn. Returns `None` without flipping
    /// the turn when the engine has no legal move; the caller reads `status`
    /// to resolve checkmate or stalemate.
    pub fn play_engine_turn(&mut self, engine: &mut dyn Engine) -> Result<Option<MoveRecord>, String> {
        let turn = play_engine_move(engine, &self.board, &self.history, self.side_to_move)?;
        let Some(record) = turn.record else {
            return Ok(None);
        };

        self.board = turn.board;
        self.history.push(record.clone());
        self.side_to_move = self.side_to_move.opposite();
        Ok(Some(record))
    }

    /// Status for the side to move, recomputed from board and history.
    pub fn status(&self) -> GameStatus {
        game_status(&self.board, self.side_to_move, &self.history)
    }

    pub fn captured_pieces(&self) -> CapturedPieces {
        captured_pieces(&self.history)
    }

    /// Full reset: fresh board, cleared history, white to move.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
