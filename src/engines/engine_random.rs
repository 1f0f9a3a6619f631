//! Uniform random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! playout tests, and low-strength gameplay.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineChoice, EngineOutput};
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::moves::move_descriptions::MoveRecord;

pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn choose_move(
        &mut self,
        board: &Board,
        history: &[MoveRecord],
        color: Color,
    ) -> Result<EngineOutput, String> {
        let legal_moves = all_legal_moves(board, color, history);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let mut rng = rand::rng();
        let picked = legal_moves
            .as_slice()
            .choose(&mut rng)
            .ok_or("failed to choose a random move")?;

        out.chosen_move = Some(EngineChoice {
            from: picked.from,
            to: picked.to,
        });
        Ok(out)
    }
}
