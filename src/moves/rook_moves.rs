use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Squares a rook on `from` attacks: each orthogonal ray up to and including
/// the first occupied square. Whether that blocker is capturable is decided
/// by the caller.
pub fn rook_attack_squares(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::new();

    for (row_step, col_step) in ROOK_DIRECTIONS {
        let mut cursor = from;
        while let Some(next) = cursor.offset(row_step, col_step) {
            out.push(next);
            if board.piece_at(next).is_some() {
                break;
            }
            cursor = next;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::rook_attack_squares;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn rook_on_empty_board_attacks_fourteen_squares() {
        let board = Board::empty();
        let d4 = Square::new(4, 3);
        assert_eq!(rook_attack_squares(&board, d4).len(), 14);
    }

    #[test]
    fn blocker_is_included_then_ray_stops() {
        let mut board = Board::empty();
        let d4 = Square::new(4, 3);
        let d6 = Square::new(2, 3);
        board.set_piece(d6, Some(Piece::new(PieceKind::Pawn, Color::Black)));

        let attacks = rook_attack_squares(&board, d4);
        assert!(attacks.contains(&d6));
        assert!(!attacks.contains(&Square::new(1, 3)));
    }
}
