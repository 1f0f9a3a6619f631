//! One-ply heuristic opponent engine.
//!
//! Enumerates every legal move for its side, plays each on a scratch board,
//! scores the resulting position, and samples uniformly among the top three
//! candidates so the automated player stays a little unpredictable.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::engines::engine_trait::{
    play_engine_move, Engine, EngineChoice, EngineOutput, EngineTurn,
};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::back_row;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::move_generation::legal_move_apply::{apply_move, ExecutionMode};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{all_legal_moves, is_checkmate};
use crate::move_generation::move_generator::{CandidateMove, RulesResult};
use crate::moves::move_descriptions::MoveRecord;

/// How many of the best-scoring candidates the engine samples among.
const TOP_CANDIDATES: usize = 3;

#[derive(Debug, Clone, Copy)]
pub struct ScoredMove {
    pub candidate: CandidateMove,
    pub score: f32,
}

pub struct HeuristicEngine;

impl HeuristicEngine {
    pub fn new() -> Self {
        Self
    }

    /// Capture values; the king carries none because it can never be taken.
    #[inline]
    fn piece_value(kind: PieceKind) -> f32 {
        match kind {
            PieceKind::Pawn => 1.0,
            PieceKind::Knight => 3.0,
            PieceKind::Bishop => 3.0,
            PieceKind::Rook => 5.0,
            PieceKind::Queen => 9.0,
            PieceKind::King => 0.0,
        }
    }

    /// Every legal move for `color`, scored on a scratch board, best first.
    pub fn ranked_moves(
        &self,
        board: &Board,
        history: &[MoveRecord],
        color: Color,
    ) -> RulesResult<Vec<ScoredMove>> {
        let mut scored = Vec::new();

        for candidate in all_legal_moves(board, color, history) {
            let (next, record) =
                apply_move(board, candidate.from, candidate.to, None, ExecutionMode::Test)?;
            let score = Self::evaluate_move(&next, &candidate, &record, history, color);
            scored.push(ScoredMove { candidate, score });
        }

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(scored)
    }

    fn evaluate_move(
        next: &Board,
        candidate: &CandidateMove,
        record: &MoveRecord,
        history: &[MoveRecord],
        color: Color,
    ) -> f32 {
        let mut score = 0.0;
        let opponent = color.opposite();
        let to = candidate.to;

        if let Some(captured) = record.captured {
            score += Self::piece_value(captured.kind) * 10.0;
        }

        if is_king_in_check(next, opponent) {
            score += 5.0;
        }
        if is_checkmate(next, opponent, history) {
            score += 1000.0;
        }

        // Center control.
        if (2..=5).contains(&to.row) && (2..=5).contains(&to.col) {
            score += 1.0;
        }

        // Reward pawns for progress toward promotion.
        if candidate.piece.kind == PieceKind::Pawn {
            score += 0.1 * to.row.abs_diff(back_row(color)) as f32;
        }

        // Develop minor pieces off the back rank.
        if matches!(candidate.piece.kind, PieceKind::Knight | PieceKind::Bishop)
            && candidate.from.row == back_row(color)
        {
            score += 2.0;
        }

        // Castling is welcome; wandering off with an unmoved king is not.
        if candidate.piece.kind == PieceKind::King && !candidate.piece.has_moved {
            if candidate.from.col.abs_diff(to.col) == 2 {
                score += 5.0;
            } else {
                score -= 3.0;
            }
        }

        score
    }

    /// Deterministically testable selection path: sort, slice the top three,
    /// and let the injected randomness break the tie.
    pub fn choose_move_with_rng<R: Rng>(
        &self,
        board: &Board,
        history: &[MoveRecord],
        color: Color,
        rng: &mut R,
    ) -> Result<EngineOutput, String> {
        let ranked = self
            .ranked_moves(board, history, color)
            .map_err(|error| error.to_string())?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string heuristic_engine legal_moves {}",
            ranked.len()
        ));

        if ranked.is_empty() {
            return Ok(out);
        }

        let top = &ranked[..ranked.len().min(TOP_CANDIDATES)];
        let picked = top.choose(rng).ok_or("failed to choose a heuristic move")?;

        out.info_lines.push(format!(
            "info string heuristic_engine score {:.1}",
            picked.score
        ));
        out.chosen_move = Some(EngineChoice {
            from: picked.candidate.from,
            to: picked.candidate.to,
        });
        Ok(out)
    }
}

impl Default for HeuristicEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for HeuristicEngine {
    fn choose_move(
        &mut self,
        board: &Board,
        history: &[MoveRecord],
        color: Color,
    ) -> Result<EngineOutput, String> {
        let mut rng = rand::rng();
        self.choose_move_with_rng(board, history, color, &mut rng)
    }
}

/// One automated-opponent turn, fixed to the second color. Returns the board
/// after the move and the committed record; the record is `None` when no
/// legal move exists and the caller resolves mate or stalemate.
pub fn opponent_move(board: &Board, history: &[MoveRecord]) -> Result<EngineTurn, String> {
    let mut engine = HeuristicEngine::new();
    play_engine_move(&mut engine, board, history, Color::Black)
}
