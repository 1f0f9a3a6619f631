//! Full legal move generation pipeline.
//!
//! Orchestrates piece-wise pseudo-move generation, simulates each candidate
//! on a scratch board, filters outcomes that leave the mover's own king
//! attacked, and derives the end-of-game predicates from the filtered sets.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, GameStatus, PieceKind, Square};
use crate::move_generation::legal_move_apply::{apply_move, ExecutionMode};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::CandidateMove;
use crate::moves::move_descriptions::MoveRecord;

fn pseudo_moves(board: &Board, from: Square, history: &[MoveRecord]) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, history, &mut out),
        PieceKind::Knight => generate_knight_moves(board, from, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, from, &mut out),
        PieceKind::Rook => generate_rook_moves(board, from, &mut out),
        PieceKind::Queen => generate_queen_moves(board, from, &mut out),
        PieceKind::King => generate_king_moves(board, from, &mut out),
    }
    out
}

/// Legal destinations for the piece on `from`. This is the only surface that
/// exposes candidate moves; pseudo-moves never leave this module.
pub fn possible_moves(board: &Board, from: Square, history: &[MoveRecord]) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    pseudo_moves(board, from, history)
        .into_iter()
        .filter(|&to| {
            // Illegal if own king is in check after the move.
            match apply_move(board, from, to, None, ExecutionMode::Test) {
                Ok((next, _)) => !is_king_in_check(&next, piece.color),
                Err(_) => false,
            }
        })
        .collect()
}

/// Every legal move for every piece of `color`.
pub fn all_legal_moves(board: &Board, color: Color, history: &[MoveRecord]) -> Vec<CandidateMove> {
    let mut out = Vec::new();
    for (from, piece) in board.occupied_squares() {
        if piece.color != color {
            continue;
        }
        for to in possible_moves(board, from, history) {
            out.push(CandidateMove { from, to, piece });
        }
    }
    out
}

/// Short-circuits on the first piece with a nonempty legal-move set.
pub fn has_any_legal_move(board: &Board, color: Color, history: &[MoveRecord]) -> bool {
    board
        .occupied_squares()
        .filter(|(_, piece)| piece.color == color)
        .any(|(from, _)| !possible_moves(board, from, history).is_empty())
}

pub fn is_checkmate(board: &Board, color: Color, history: &[MoveRecord]) -> bool {
    is_king_in_check(board, color) && !has_any_legal_move(board, color, history)
}

pub fn is_stalemate(board: &Board, color: Color, history: &[MoveRecord]) -> bool {
    !is_king_in_check(board, color) && !has_any_legal_move(board, color, history)
}

/// Derive the status for the side to move after the previous execution.
pub fn game_status(board: &Board, side_to_move: Color, history: &[MoveRecord]) -> GameStatus {
    if is_checkmate(board, side_to_move, history) {
        return match side_to_move {
            Color::White => GameStatus::BlackWins,
            Color::Black => GameStatus::WhiteWins,
        };
    }
    if is_stalemate(board, side_to_move, history) {
        return GameStatus::Stalemate;
    }
    if is_king_in_check(board, side_to_move) {
        return GameStatus::Check;
    }
    GameStatus::Playing
}
