use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::push_targets_avoiding_friendly;
use crate::moves::knight_moves::knight_attack_squares;

pub fn generate_knight_moves(board: &Board, from: Square, out: &mut Vec<Square>) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };
    push_targets_avoiding_friendly(board, piece.color, knight_attack_squares(from), out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Square;

    #[test]
    fn startpos_knight_has_two_moves() {
        let board = Board::new_game();
        let mut out = Vec::new();
        generate_knight_moves(&board, Square::new(7, 1), &mut out);
        assert_eq!(out.len(), 2);
        assert!(out.contains(&Square::new(5, 0)));
        assert!(out.contains(&Square::new(5, 2)));
    }
}
