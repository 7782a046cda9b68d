//! Scripted opening: one (piece, target square) step per ply.
//!
//! The default script is the Scholar's-mate attack for both colours. It is
//! keyed on ply only, so once the opponent leaves the script the remaining
//! steps simply stop matching.

use std::str::FromStr;

use crate::game_state::chess_types::{PieceKind, Square};
use crate::moves::chess_move::Move;
use crate::utils::algebraic::{algebraic_to_square, NotationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedMove {
    pub piece: PieceKind,
    pub target: Square,
}

impl ScriptedMove {
    #[inline]
    pub fn matches(&self, mv: &Move) -> bool {
        mv.moving_piece == self.piece && mv.target == self.target
    }
}

pub const SCHOLARS_MATE: [ScriptedMove; 6] = [
    ScriptedMove { piece: PieceKind::Pawn, target: Square::from_rank_file(3, 4) },
    ScriptedMove { piece: PieceKind::Pawn, target: Square::from_rank_file(4, 4) },
    ScriptedMove { piece: PieceKind::Bishop, target: Square::from_rank_file(3, 2) },
    ScriptedMove { piece: PieceKind::Bishop, target: Square::from_rank_file(4, 2) },
    ScriptedMove { piece: PieceKind::Queen, target: Square::from_rank_file(2, 5) },
    ScriptedMove { piece: PieceKind::Queen, target: Square::from_rank_file(5, 5) },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningScript {
    steps: Vec<ScriptedMove>,
}

impl OpeningScript {
    pub fn new(steps: Vec<ScriptedMove>) -> Self {
        Self { steps }
    }

    pub fn scholars_mate() -> Self {
        Self::new(SCHOLARS_MATE.to_vec())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step scripted for `ply`, if the script is still running.
    pub fn step_for_ply(&self, ply: u32) -> Option<ScriptedMove> {
        usize::try_from(ply)
            .ok()
            .and_then(|ply| self.steps.get(ply))
            .copied()
    }
}

impl Default for OpeningScript {
    fn default() -> Self {
        Self::scholars_mate()
    }
}

/// Whitespace separated steps such as `Pe4 Pe5 Bc4`, piece letter first.
impl FromStr for OpeningScript {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(|token| {
                let invalid = || NotationError::InvalidMove(token.to_owned());
                let piece_char = token.chars().next().ok_or_else(invalid)?;
                let piece = PieceKind::from_fen_char(piece_char).ok_or_else(invalid)?;
                let target = algebraic_to_square(&token[piece_char.len_utf8()..])?;
                Ok(ScriptedMove { piece, target })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}
