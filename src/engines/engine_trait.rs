//! Engine abstraction layer.
//!
//! Defines the search parameters a caller hands in and the output payload an
//! engine returns, so move pickers can be swapped behind one trait.

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::utils::fen_parser::FenError;

/// Time allowance for one move. Heuristic engines may ignore it.
#[derive(Debug, Clone, Default)]
pub struct GoParams {
    pub movetime_ms: Option<u64>,
    pub wtime_ms: Option<u64>,
    pub btime_ms: Option<u64>,
    pub winc_ms: Option<u64>,
    pub binc_ms: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("position has no legal moves")]
    NoLegalMoves,

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("invalid value '{value}' for option {name}")]
    InvalidOptionValue { name: String, value: String },

    #[error(transparent)]
    Fen(#[from] FenError),
}

pub trait Engine: Send {
    fn name(&self) -> &str;
    fn author(&self) -> &str;

    fn new_game(&mut self) {}
    fn set_option(&mut self, name: &str, _value: &str) -> Result<(), EngineError> {
        Err(EngineError::UnknownOption(name.to_owned()))
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, EngineError>;
}
