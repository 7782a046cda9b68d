//! Crate root module declarations for the scholar heuristic chess bot.
//!
//! Exposes the host rules engine (game state, move generation, draw rules),
//! the rules-oracle seam the move picker talks through, the tactical
//! simulator and heuristic pipeline, the engine wrapper and notation helpers.

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
    pub mod zobrist;
}

pub mod moves {
    pub mod attack_tables;
    pub mod chess_move;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod legal_moves_pawn;
    pub mod legal_moves_pieces;
    pub mod perft;
}

pub mod rules {
    pub mod draw_rules;
    pub mod rules_oracle;
}

pub mod search {
    pub mod heuristic_pipeline;
    pub mod piece_values;
    pub mod simulation;
    pub mod tactics;
}

pub mod tables {
    pub mod opening_script;
}

pub mod engines {
    pub mod engine_config;
    pub mod engine_scholar;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
}
