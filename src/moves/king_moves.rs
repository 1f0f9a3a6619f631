//! King step geometry.
//!
//! Only the eight adjacent squares live here; castling is a legality concern
//! handled in move generation. Check detection relies on this restricted
//! pattern to avoid recursing into castling legality.

use crate::game_state::chess_types::Square;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn king_attack_squares(from: Square) -> Vec<Square> {
    KING_OFFSETS
        .into_iter()
        .filter_map(|(row_delta, col_delta)| from.offset(row_delta, col_delta))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::king_attack_squares;
    use crate::game_state::chess_types::Square;

    #[test]
    fn king_attacks_from_a1_have_three_targets() {
        let a1 = Square::new(7, 0);
        assert_eq!(king_attack_squares(a1).len(), 3);
    }

    #[test]
    fn king_attacks_from_d4_have_eight_targets() {
        let d4 = Square::new(4, 3);
        assert_eq!(king_attack_squares(d4).len(), 8);
    }
}
