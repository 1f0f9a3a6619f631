use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::moves::bishop_moves::bishop_attack_squares;
use crate::moves::king_moves::king_attack_squares;
use crate::moves::knight_moves::knight_attack_squares;
use crate::moves::pawn_moves::pawn_attack_squares;
use crate::moves::queen_moves::queen_attack_squares;
use crate::moves::rook_moves::rook_attack_squares;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.king_square(color)
}

/// Whether this color's king stands on a square attacked by the other side.
/// A missing king reports "not attacked"; that is a corrupted-state shield,
/// not a detected game outcome.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// Whether any piece of `attacker_color` attacks `square`. Pawns contribute
/// their diagonals only and kings their eight adjacent squares only, so this
/// never recurses into legality filtering.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    for (from, piece) in board.occupied_squares() {
        if piece.color != attacker_color {
            continue;
        }

        let attacked = match piece.kind {
            PieceKind::Pawn => pawn_attack_squares(piece.color, from),
            PieceKind::Knight => knight_attack_squares(from),
            PieceKind::Bishop => bishop_attack_squares(board, from),
            PieceKind::Rook => rook_attack_squares(board, from),
            PieceKind::Queen => queen_attack_squares(board, from),
            PieceKind::King => king_attack_squares(from),
        };

        if attacked.contains(&square) {
            return true;
        }
    }

    false
}
