use crate::game_state::chess_types::Square;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The in-bounds subset of the eight fixed knight destinations.
pub fn knight_attack_squares(from: Square) -> Vec<Square> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(|(row_delta, col_delta)| from.offset(row_delta, col_delta))
        .collect()
}
