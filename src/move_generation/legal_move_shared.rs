use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

/// Keep only the targets not occupied by the mover's own pieces. Attack rays
/// already include their first blocker, so this is the step that turns an
/// attack set into a pseudo-move set.
pub fn push_targets_avoiding_friendly(
    board: &Board,
    mover_color: Color,
    targets: Vec<Square>,
    out: &mut Vec<Square>,
) {
    for target in targets {
        match board.piece_at(target) {
            Some(piece) if piece.color == mover_color => {}
            _ => out.push(target),
        }
    }
}
