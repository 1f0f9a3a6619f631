use crate::game_state::board::Board;
use crate::game_state::chess_rules::promotion_row;
use crate::game_state::chess_types::{CastleSide, PieceKind, Square};
use crate::move_generation::move_generator::{RulesError, RulesResult};
use crate::moves::move_descriptions::MoveRecord;

/// Whether a move execution is hypothetical or committed. Test executions
/// are used by the legality filter and by opponent evaluation; they must not
/// set `has_moved`, and their records are for the caller to discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Test,
    Real,
}

/// Apply one already-validated move, producing the resulting board and the
/// record describing it. History is never touched here; committed records are
/// appended by the caller that owns the history.
///
/// Special moves are recognized from board geometry: a two-column king shift
/// is castling, and a diagonal pawn move onto an empty square is en passant.
/// Promotion happens only when `promotion` is supplied and the mover is a
/// pawn landing on its promotion row.
pub fn apply_move(
    board: &Board,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
    mode: ExecutionMode,
) -> RulesResult<(Board, MoveRecord)> {
    let piece = board.piece_at(from).ok_or(RulesError::EmptySquare(from))?;
    let mut next = board.clone();

    // Resolve the captured piece before the destination is overwritten.
    let captured = next.piece_at(to);

    let mut castling = None;
    if piece.kind == PieceKind::King && from.col.abs_diff(to.col) == 2 {
        let side = if to.col > from.col {
            CastleSide::Kingside
        } else {
            CastleSide::Queenside
        };
        let (rook_from_col, rook_to_col) = match side {
            CastleSide::Kingside => (7, 5),
            CastleSide::Queenside => (0, 3),
        };

        if let Some(mut rook) = next.take_piece(Square::new(from.row, rook_from_col)) {
            if mode == ExecutionMode::Real {
                rook.has_moved = true;
            }
            next.set_piece(Square::new(from.row, rook_to_col), Some(rook));
        }
        castling = Some(side);
    }

    // A diagonal pawn move without a capture must be en passant; the passed
    // pawn stands beside the origin on the destination column.
    let mut en_passant = false;
    if piece.kind == PieceKind::Pawn && from.col != to.col && captured.is_none() {
        next.set_piece(Square::new(from.row, to.col), None);
        en_passant = true;
    }

    let mut moved = piece;
    if mode == ExecutionMode::Real {
        moved.has_moved = true;
    }

    let mut promoted = None;
    if let Some(kind) = promotion {
        if piece.kind == PieceKind::Pawn && to.row == promotion_row(piece.color) {
            moved.kind = kind;
            promoted = Some(kind);
        }
    }

    next.set_piece(to, Some(moved));
    next.set_piece(from, None);

    let record = MoveRecord {
        piece,
        from,
        to,
        captured,
        promotion: promoted,
        castling,
        en_passant,
    };

    Ok((next, record))
}

#[cfg(test)]
mod tests {
    use super::{apply_move, ExecutionMode};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{CastleSide, Color, Piece, PieceKind, Square};
    use crate::move_generation::move_generator::RulesError;

    #[test]
    fn quiet_move_transfers_the_piece() {
        let board = Board::new_game();
        let (next, record) = apply_move(
            &board,
            Square::new(6, 4),
            Square::new(4, 4),
            None,
            ExecutionMode::Real,
        )
        .expect("pawn push should apply");

        assert!(next.piece_at(Square::new(6, 4)).is_none());
        let pawn = next.piece_at(Square::new(4, 4)).expect("pawn should land on e4");
        assert!(pawn.has_moved);
        assert_eq!(record.captured, None);
        assert!(!record.piece.has_moved, "record keeps the pre-move identity");
    }

    #[test]
    fn test_execution_leaves_flags_unset() {
        let board = Board::new_game();
        let (next, _) = apply_move(
            &board,
            Square::new(6, 4),
            Square::new(4, 4),
            None,
            ExecutionMode::Test,
        )
        .expect("pawn push should apply");

        let pawn = next.piece_at(Square::new(4, 4)).expect("pawn should land on e4");
        assert!(!pawn.has_moved);
        // The input board is untouched by construction.
        assert!(board.piece_at(Square::new(6, 4)).is_some());
    }

    #[test]
    fn capture_is_resolved_before_overwrite() {
        let mut board = Board::empty();
        let d4 = Square::new(4, 3);
        let d7 = Square::new(1, 3);
        board.set_piece(d4, Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set_piece(d7, Some(Piece::new(PieceKind::Knight, Color::Black)));

        let (next, record) =
            apply_move(&board, d4, d7, None, ExecutionMode::Real).expect("capture should apply");
        let captured = record.captured.expect("a capture should be recorded");
        assert_eq!(captured.kind, PieceKind::Knight);
        assert_eq!(captured.color, Color::Black);
        assert_eq!(next.piece_at(d7).map(|piece| piece.kind), Some(PieceKind::Rook));
    }

    #[test]
    fn kingside_castling_relocates_the_rook() {
        let mut board = Board::empty();
        board.set_piece(Square::new(7, 4), Some(Piece::new(PieceKind::King, Color::White)));
        board.set_piece(Square::new(7, 7), Some(Piece::new(PieceKind::Rook, Color::White)));

        let (next, record) = apply_move(
            &board,
            Square::new(7, 4),
            Square::new(7, 6),
            None,
            ExecutionMode::Real,
        )
        .expect("castling should apply");

        assert_eq!(record.castling, Some(CastleSide::Kingside));
        let king = next.piece_at(Square::new(7, 6)).expect("king on g1");
        let rook = next.piece_at(Square::new(7, 5)).expect("rook on f1");
        assert!(king.has_moved);
        assert!(rook.has_moved);
        assert!(next.piece_at(Square::new(7, 7)).is_none());
    }

    #[test]
    fn queenside_castling_relocates_the_rook() {
        let mut board = Board::empty();
        board.set_piece(Square::new(0, 4), Some(Piece::new(PieceKind::King, Color::Black)));
        board.set_piece(Square::new(0, 0), Some(Piece::new(PieceKind::Rook, Color::Black)));

        let (next, record) = apply_move(
            &board,
            Square::new(0, 4),
            Square::new(0, 2),
            None,
            ExecutionMode::Real,
        )
        .expect("castling should apply");

        assert_eq!(record.castling, Some(CastleSide::Queenside));
        assert!(next.piece_at(Square::new(0, 2)).is_some());
        assert!(next.piece_at(Square::new(0, 3)).is_some());
        assert!(next.piece_at(Square::new(0, 0)).is_none());
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mut board = Board::empty();
        let e5 = Square::new(3, 4);
        let d5 = Square::new(3, 3);
        board.set_piece(e5, Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set_piece(d5, Some(Piece::new(PieceKind::Pawn, Color::Black)));

        let (next, record) = apply_move(&board, e5, Square::new(2, 3), None, ExecutionMode::Real)
            .expect("en passant should apply");

        assert!(record.en_passant);
        assert_eq!(record.captured, None);
        assert!(next.piece_at(d5).is_none());
        assert_eq!(
            next.piece_at(Square::new(2, 3)).map(|piece| piece.kind),
            Some(PieceKind::Pawn)
        );
    }

    #[test]
    fn promotion_substitutes_the_chosen_kind() {
        let mut board = Board::empty();
        let a7 = Square::new(1, 0);
        board.set_piece(a7, Some(Piece::new(PieceKind::Pawn, Color::White)));

        let (next, record) = apply_move(
            &board,
            a7,
            Square::new(0, 0),
            Some(PieceKind::Queen),
            ExecutionMode::Real,
        )
        .expect("promotion should apply");

        assert_eq!(record.promotion, Some(PieceKind::Queen));
        assert_eq!(record.piece.kind, PieceKind::Pawn);
        assert_eq!(
            next.piece_at(Square::new(0, 0)).map(|piece| piece.kind),
            Some(PieceKind::Queen)
        );
    }

    #[test]
    fn promotion_is_ignored_off_the_last_rank() {
        let mut board = Board::empty();
        let a3 = Square::new(5, 0);
        board.set_piece(a3, Some(Piece::new(PieceKind::Pawn, Color::White)));

        let (next, record) = apply_move(
            &board,
            a3,
            Square::new(4, 0),
            Some(PieceKind::Queen),
            ExecutionMode::Real,
        )
        .expect("pawn push should apply");

        assert_eq!(record.promotion, None);
        assert_eq!(
            next.piece_at(Square::new(4, 0)).map(|piece| piece.kind),
            Some(PieceKind::Pawn)
        );
    }

    #[test]
    fn empty_origin_is_rejected() {
        let board = Board::empty();
        let result = apply_move(
            &board,
            Square::new(4, 4),
            Square::new(3, 4),
            None,
            ExecutionMode::Real,
        );
        assert_eq!(result, Err(RulesError::EmptySquare(Square::new(4, 4))));
    }
}
