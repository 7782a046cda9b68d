//! Zobrist hashing for position identity and repetition tracking.
//!
//! Keys come from a fixed-seed generator so hashes are stable for the
//! lifetime of a build, which keeps repetition tests reproducible.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::chess_types::*;

const ZOBRIST_SEED: u64 = 0x5C40_1A2B_D00D_F00D;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[[u64; 64]; 6]; 2],
    side_to_move: u64,
    castling: [u64; 16],
    en_passant_file: [u64; 8],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

    let mut piece_square = [[[0u64; 64]; 6]; 2];
    for color in &mut piece_square {
        for piece in color {
            for key in piece {
                *key = rng.random();
            }
        }
    }

    let side_to_move = rng.random();

    let mut castling = [0u64; 16];
    for key in &mut castling {
        *key = rng.random();
    }

    let mut en_passant_file = [0u64; 8];
    for key in &mut en_passant_file {
        *key = rng.random();
    }

    ZobristTables {
        piece_square,
        side_to_move,
        castling,
        en_passant_file,
    }
}

/// Full recomputation of the position key from scratch.
pub fn compute_zobrist_key(game_state: &GameState) -> u64 {
    let tables = tables();
    let mut key = 0u64;

    for color in [Color::Light, Color::Dark] {
        for piece in ALL_PIECE_KINDS {
            for sq in Square::iter_bits(game_state.pieces[color.index()][piece.index()]) {
                key ^= tables.piece_square[color.index()][piece.index()][sq.index() as usize];
            }
        }
    }

    if game_state.side_to_move == Color::Dark {
        key ^= tables.side_to_move;
    }

    key ^= tables.castling[(game_state.castling_rights & 0x0F) as usize];

    if let Some(ep) = game_state.en_passant_square {
        key ^= tables.en_passant_file[ep.file() as usize];
    }

    key
}
