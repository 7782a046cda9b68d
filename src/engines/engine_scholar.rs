//! Heuristic "scholar" engine.
//!
//! Wraps the layered move picker behind the `Engine` trait. The time
//! allowance is reported back but never consulted: one decision is a fixed,
//! two-ply-bounded amount of work.

use log::debug;

use crate::engines::engine_config::ScholarConfig;
use crate::engines::engine_trait::{Engine, EngineError, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::search::heuristic_pipeline::decide;

#[derive(Debug, Clone, Default)]
pub struct ScholarEngine {
    config: ScholarConfig,
}

impl ScholarEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScholarConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &ScholarConfig {
        &self.config
    }

    /// Parse `fen` and pick a move for it.
    pub fn choose_move_for_fen(
        &mut self,
        fen: &str,
        params: &GoParams,
    ) -> Result<EngineOutput, EngineError> {
        let game_state = GameState::from_fen(fen)?;
        self.choose_move(&game_state, params)
    }
}

impl Engine for ScholarEngine {
    fn name(&self) -> &str {
        "PlumChess Scholar"
    }

    fn author(&self) -> &str {
        "jwkunz+codex"
    }

    fn new_game(&mut self) {
        debug!("scholar_engine new game");
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), EngineError> {
        self.config.set_option(name, value)?;
        debug!("scholar_engine option {name} = {value}");
        Ok(())
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, EngineError> {
        let legal_count = game_state.legal_moves().len();
        if legal_count == 0 {
            return Err(EngineError::NoLegalMoves);
        }

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string scholar_engine legal_moves {legal_count}"
        ));
        if let Some(movetime) = params.movetime_ms {
            out.info_lines
                .push(format!("info string scholar_engine movetime_ms {movetime} (unused)"));
        }

        let mut position = game_state.clone();
        let decision = decide(&mut position, &self.config);

        out.info_lines.push(format!(
            "info string scholar_engine stage {}",
            decision.stage
        ));
        out.best_move = Some(decision.best_move);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use rand::prelude::IndexedRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::ScholarEngine;
    use crate::engines::engine_trait::{Engine, EngineError, GoParams};
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;

    #[test]
    fn opening_move_and_info_lines() {
        let mut engine = ScholarEngine::new();
        let params = GoParams {
            movetime_ms: Some(1000),
            ..GoParams::default()
        };
        let out = engine
            .choose_move(&GameState::new_game(), &params)
            .expect("start position has moves");

        assert_eq!(out.best_move.map(|mv| mv.to_string()).as_deref(), Some("e2e4"));
        assert!(out
            .info_lines
            .iter()
            .any(|line| line == "info string scholar_engine legal_moves 20"));
        assert!(out
            .info_lines
            .iter()
            .any(|line| line == "info string scholar_engine stage opening_book"));
    }

    #[test]
    fn finished_games_are_reported_as_errors() {
        let mut engine = ScholarEngine::new();
        let mated = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("FEN should parse");
        assert_eq!(
            engine.choose_move(&mated, &GoParams::default()).unwrap_err(),
            EngineError::NoLegalMoves
        );
    }

    #[test]
    fn fen_entry_point_reports_parse_errors() {
        let mut engine = ScholarEngine::new();
        let out = engine
            .choose_move_for_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2", &GoParams::default())
            .expect("FEN should parse");
        assert_eq!(out.best_move.map(|mv| mv.to_string()).as_deref(), Some("e5d6"));

        assert!(matches!(
            engine.choose_move_for_fen("not a fen", &GoParams::default()),
            Err(EngineError::Fen(_))
        ));
    }

    #[test]
    fn options_reach_the_config() {
        let mut engine = ScholarEngine::new();
        engine.set_option("OpeningBook", "false").expect("option should apply");
        assert!(engine.config().opening_script.is_none());

        let out = engine
            .choose_move(&GameState::new_game(), &GoParams::default())
            .expect("start position has moves");
        assert_eq!(out.best_move.map(|mv| mv.to_string()).as_deref(), Some("b1a3"));

        assert_eq!(
            engine.set_option("Threads", "4"),
            Err(EngineError::UnknownOption("Threads".to_owned()))
        );
    }

    /// The scholar plays light against a seeded random opponent. Every
    /// returned move must be legal and the caller's position untouched.
    #[test]
    fn seeded_games_against_random_mover_stay_legal() {
        let mut engine = ScholarEngine::new();
        let params = GoParams::default();

        for seed in 0..4u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = GameState::new_game();
            engine.new_game();

            for _ in 0..60 {
                let legal = game.legal_moves();
                if legal.is_empty() || game.is_draw() {
                    break;
                }

                let mv = if game.side_to_move == Color::Light {
                    let before = game.get_fen();
                    let out = engine
                        .choose_move(&game, &params)
                        .expect("position with moves should produce a move");
                    assert_eq!(game.get_fen(), before);
                    out.best_move.expect("engine should return a move")
                } else {
                    *legal.choose(&mut rng).expect("legal list is not empty")
                };

                assert!(legal.contains(&mv), "seed {seed}: {mv} is not legal");
                game.make_move(&mv);
            }
        }
    }
}
