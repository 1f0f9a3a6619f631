use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastleSide, Piece, PieceKind, Square};
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_move_shared::push_targets_avoiding_friendly;
use crate::moves::king_moves::king_attack_squares;

pub fn generate_king_moves(board: &Board, from: Square, out: &mut Vec<Square>) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };
    push_targets_avoiding_friendly(board, piece.color, king_attack_squares(from), out);
    generate_castling_moves(board, from, piece, out);
}

fn generate_castling_moves(board: &Board, from: Square, king: Piece, out: &mut Vec<Square>) {
    if king.has_moved {
        return;
    }

    // Cannot castle out of check.
    if is_square_attacked(board, from, king.color.opposite()) {
        return;
    }

    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        if can_castle(board, from, king, side) {
            let col_delta = match side {
                CastleSide::Kingside => 2,
                CastleSide::Queenside => -2,
            };
            if let Some(destination) = from.offset(0, col_delta) {
                out.push(destination);
            }
        }
    }
}

/// Every failed sub-condition silently omits the castling destination; this
/// is never an error.
fn can_castle(board: &Board, from: Square, king: Piece, side: CastleSide) -> bool {
    let rook_col = match side {
        CastleSide::Kingside => 7,
        CastleSide::Queenside => 0,
    };
    let rook_square = Square::new(from.row, rook_col);
    match board.piece_at(rook_square) {
        Some(rook)
            if rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved => {}
        _ => return false,
    }

    // All squares strictly between king and rook must be empty.
    let (low, high) = if rook_col > from.col {
        (from.col + 1, rook_col - 1)
    } else {
        (rook_col + 1, from.col - 1)
    };
    for col in low..=high {
        if board.piece_at(Square::new(from.row, col)).is_some() {
            return false;
        }
    }

    // The king may not pass through or land on an attacked square; probe by
    // placing it on each transit square and re-running check detection.
    let col_step = match side {
        CastleSide::Kingside => 1,
        CastleSide::Queenside => -1,
    };
    for hop in 1..=2 {
        let Some(transit) = from.offset(0, col_step * hop) else {
            return false;
        };
        let mut probe = board.clone();
        probe.set_piece(from, None);
        probe.set_piece(transit, Some(king));
        if is_king_in_check(&probe, king.color) {
            return false;
        }
    }

    true
}
