//! Fully described move value.
//!
//! Moves are produced by the legal move generator with every attribute the
//! move picker filters on already resolved (moving piece, captured piece,
//! promotion, castle and en-passant flags), so no board lookup is needed to
//! classify one.

use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub start: Square,
    pub target: Square,
    pub moving_piece: PieceKind,
    pub captured_piece: Option<PieceKind>,
    pub promotion_piece: Option<PieceKind>,
    pub is_castle: bool,
    pub is_en_passant: bool,
}

impl Move {
    /// Plain non-capturing move.
    pub const fn quiet(start: Square, target: Square, moving_piece: PieceKind) -> Self {
        Self {
            start,
            target,
            moving_piece,
            captured_piece: None,
            promotion_piece: None,
            is_castle: false,
            is_en_passant: false,
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.promotion_piece.is_some()
    }

    /// Pawn advancing two ranks from its start square.
    #[inline]
    pub const fn is_double_pawn_push(&self) -> bool {
        matches!(self.moving_piece, PieceKind::Pawn)
            && self.start.index().abs_diff(self.target.index()) == 16
    }

    /// Square of the pawn removed by an en-passant capture.
    #[inline]
    pub const fn en_passant_victim(&self) -> Square {
        Square::from_rank_file(self.start.rank(), self.target.file())
    }
}

/// Long algebraic notation (`e2e4`, `e7e8q`).
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.target)?;
        if let Some(promo) = self.promotion_piece {
            write!(f, "{}", promo.fen_char())?;
        }
        Ok(())
    }
}
