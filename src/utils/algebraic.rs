//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! row/column representation used by the board. Row 0 is rank 8, so the rank
//! digit maps to `8 - row`.

use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a board square.
#[inline]
pub fn algebraic_to_square(text: &str) -> Result<Square, String> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {text}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    let col = file - b'a';
    let row = b'8' - rank;
    Ok(Square::new(row, col))
}

/// Convert a board square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, String> {
    if square.row > 7 || square.col > 7 {
        return Err(format!(
            "Square out of bounds: ({}, {})",
            square.row, square.col
        ));
    }

    let file_char = char::from(b'a' + square.col);
    let rank_char = char::from(b'8' - square.row);
    Ok(format!("{file_char}{rank_char}"))
}
