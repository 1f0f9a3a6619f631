use crate::game_state::chess_rules::pawn_direction;
use crate::game_state::chess_types::{Color, Square};

/// Diagonal squares a pawn of `color` attacks from `from`. Used both for
/// capture generation and for check detection; the forward step is never an
/// attack.
pub fn pawn_attack_squares(color: Color, from: Square) -> Vec<Square> {
    let direction = pawn_direction(color);
    [-1i8, 1i8]
        .into_iter()
        .filter_map(|col_delta| from.offset(direction, col_delta))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::pawn_attack_squares;
    use crate::game_state::chess_types::{Color, Square};

    #[test]
    fn white_pawn_attacks_from_e2() {
        let e2 = Square::new(6, 4);
        let attacks = pawn_attack_squares(Color::White, e2);
        assert_eq!(attacks.len(), 2);
        assert!(attacks.contains(&Square::new(5, 3)));
        assert!(attacks.contains(&Square::new(5, 5)));
    }

    #[test]
    fn black_pawn_attacks_from_e7() {
        let e7 = Square::new(1, 4);
        let attacks = pawn_attack_squares(Color::Black, e7);
        assert_eq!(attacks.len(), 2);
        assert!(attacks.contains(&Square::new(2, 3)));
        assert!(attacks.contains(&Square::new(2, 5)));
    }

    #[test]
    fn edge_pawn_attacks_one_square() {
        let a2 = Square::new(6, 0);
        let attacks = pawn_attack_squares(Color::White, a2);
        assert_eq!(attacks, vec![Square::new(5, 1)]);
    }
}
