use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::push_targets_avoiding_friendly;
use crate::moves::queen_moves::queen_attack_squares;

pub fn generate_queen_moves(board: &Board, from: Square, out: &mut Vec<Square>) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };
    push_targets_avoiding_friendly(board, piece.color, queen_attack_squares(board, from), out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn queen_moves_union_rook_and_bishop_rays() {
        let mut board = Board::empty();
        let d4 = Square::new(4, 3);
        board.set_piece(d4, Some(Piece::new(PieceKind::Queen, Color::White)));

        let mut out = Vec::new();
        generate_queen_moves(&board, d4, &mut out);
        assert_eq!(out.len(), 27);
    }
}
