use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::push_targets_avoiding_friendly;
use crate::moves::bishop_moves::bishop_attack_squares;

pub fn generate_bishop_moves(board: &Board, from: Square, out: &mut Vec<Square>) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };
    push_targets_avoiding_friendly(board, piece.color, bishop_attack_squares(board, from), out);
}
