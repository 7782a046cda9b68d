//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! square representation reused by FEN and long algebraic parsing.

use crate::game_state::chess_types::Square;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid algebraic square: {0}")]
    InvalidSquare(String),

    #[error("invalid long algebraic move: {0}")]
    InvalidMove(String),

    #[error("no legal move matches {0}")]
    NoSuchMove(String),
}

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> Result<Square, NotationError> {
    let &[file, rank] = square.as_bytes() else {
        return Err(NotationError::InvalidSquare(square.to_owned()));
    };

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(NotationError::InvalidSquare(square.to_owned()));
    }

    Ok(Square::from_rank_file(rank - b'1', file - b'a'))
}

/// Convert a square to algebraic notation (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.file());
    let rank_char = char::from(b'1' + square.rank());
    format!("{file_char}{rank_char}")
}
