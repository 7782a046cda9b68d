//! Static material values.

use crate::game_state::chess_types::PieceKind;
use crate::moves::chess_move::Move;

/// Bonus added to an unrecapturable capture that also gives check. Quiet
/// checks get no bonus and score zero.
pub const CHECK_BONUS: i32 = 50;

/// Value the safety stage orders moves around: minor pieces come first.
pub const MINOR_PIECE_VALUE: i32 = 300;

#[inline]
pub const fn piece_value(piece: PieceKind) -> i32 {
    match piece {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 300,
        PieceKind::Bishop => 300,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 10000,
    }
}

/// `None` is an empty square and is worth nothing.
#[inline]
pub const fn piece_value_of(piece: Option<PieceKind>) -> i32 {
    match piece {
        Some(piece) => piece_value(piece),
        None => 0,
    }
}

/// Raw material won by `mv`; zero for non-captures.
#[inline]
pub const fn capture_value(mv: &Move) -> i32 {
    piece_value_of(mv.captured_piece)
}

/// Distance of the moving piece's value from a minor piece's value.
#[inline]
pub const fn development_distance(mv: &Move) -> i32 {
    (piece_value(mv.moving_piece) - MINOR_PIECE_VALUE).abs()
}
