use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::bishop_attack_squares;
use crate::moves::rook_moves::rook_attack_squares;

/// Queen attacks are the union of the rook and bishop rays.
pub fn queen_attack_squares(board: &Board, from: Square) -> Vec<Square> {
    let mut out = rook_attack_squares(board, from);
    out.extend(bishop_attack_squares(board, from));
    out
}
