//! Engine abstraction layer for the automated player.
//!
//! Defines the common output payload so different opponent strategies can be
//! selected behind a single trait interface, and the shared turn driver that
//! commits a chosen move with the automated promotion policy.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::promotion_row;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::move_generation::legal_move_apply::{apply_move, ExecutionMode};
use crate::moves::move_descriptions::MoveRecord;

/// The automated side never prompts; a pawn reaching the far rank always
/// becomes a queen.
pub const AUTOMATED_PROMOTION: PieceKind = PieceKind::Queen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineChoice {
    pub from: Square,
    pub to: Square,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub chosen_move: Option<EngineChoice>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn new_game(&mut self) {}

    /// Pick a move for `color`, or report none when no legal move exists.
    fn choose_move(
        &mut self,
        board: &Board,
        history: &[MoveRecord],
        color: Color,
    ) -> Result<EngineOutput, String>;
}

/// Result of one automated turn: the board after the move, and the committed
/// record. `record` is `None` when the engine had no legal move; the caller
/// resolves that as checkmate or stalemate.
#[derive(Debug, Clone)]
pub struct EngineTurn {
    pub board: Board,
    pub record: Option<MoveRecord>,
}

/// Ask `engine` for a move and commit it, force-promoting to a queen when a
/// pawn reaches the far rank. History is returned to the caller through the
/// record; it is never mutated here.
pub fn play_engine_move(
    engine: &mut dyn Engine,
    board: &Board,
    history: &[MoveRecord],
    color: Color,
) -> Result<EngineTurn, String> {
    let output = engine.choose_move(board, history, color)?;
    let Some(choice) = output.chosen_move else {
        return Ok(EngineTurn {
            board: board.clone(),
            record: None,
        });
    };

    let promotion = board
        .piece_at(choice.from)
        .filter(|piece| piece.kind == PieceKind::Pawn && choice.to.row == promotion_row(color))
        .map(|_| AUTOMATED_PROMOTION);

    let (next, record) = apply_move(board, choice.from, choice.to, promotion, ExecutionMode::Real)
        .map_err(|error| error.to_string())?;

    Ok(EngineTurn {
        board: next,
        record: Some(record),
    })
}
