use crate::game_state::board::Board;
use crate::game_state::chess_rules::{pawn_direction, pawn_row};
use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::moves::move_descriptions::MoveRecord;
use crate::moves::pawn_moves::pawn_attack_squares;

pub fn generate_pawn_moves(
    board: &Board,
    from: Square,
    history: &[MoveRecord],
    out: &mut Vec<Square>,
) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };
    let direction = pawn_direction(piece.color);

    // Forward steps: single always, double only from the home rank with both
    // intervening squares empty.
    if let Some(one_step) = from.offset(direction, 0) {
        if board.piece_at(one_step).is_none() {
            out.push(one_step);

            if from.row == pawn_row(piece.color) {
                if let Some(two_step) = from.offset(2 * direction, 0) {
                    if board.piece_at(two_step).is_none() {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    // Diagonal captures, including en passant onto an empty square.
    for target in pawn_attack_squares(piece.color, from) {
        match board.piece_at(target) {
            Some(other) if other.color != piece.color => out.push(target),
            Some(_) => {}
            None => {
                if can_capture_en_passant(piece, from, target, history) {
                    out.push(target);
                }
            }
        }
    }
}

/// The immediately preceding move must be an enemy pawn double-step that
/// ended beside the mover, aligned with the target column.
fn can_capture_en_passant(piece: Piece, from: Square, target: Square, history: &[MoveRecord]) -> bool {
    let Some(last) = history.last() else {
        return false;
    };

    last.piece.kind == PieceKind::Pawn
        && last.piece.color != piece.color
        && last.from.col == target.col
        && last.to.col == target.col
        && last.to.row == from.row
        && last.from.row.abs_diff(last.to.row) == 2
}
