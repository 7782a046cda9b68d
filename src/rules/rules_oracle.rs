//! Rules oracle seam used by the move picker.
//!
//! The heuristic pipeline and tactical simulator only talk to a position
//! through this trait, so any rules engine that can generate moves, make and
//! take them back, and answer check/draw/attack queries can host the bot.

use log::trace;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;

pub trait RulesOracle {
    /// Legal moves in a stable generation order.
    fn legal_moves(&self) -> Vec<Move>;

    /// Play a move taken from `legal_moves()`.
    fn apply_move(&mut self, mv: &Move);

    /// Take back the most recently applied move.
    fn undo_move(&mut self, mv: &Move);

    /// Side to move is in check.
    fn is_check(&self) -> bool;
    fn is_checkmate(&self) -> bool;
    fn is_draw(&self) -> bool;

    /// `square` is attacked by the side that is not to move.
    fn square_attacked_by_opponent(&self, square: Square) -> bool;

    /// Pass the turn. Returns false, leaving the position untouched, when
    /// passing is not allowed.
    fn try_skip_turn(&mut self) -> bool;
    fn undo_skip_turn(&mut self);

    fn ply_count(&self) -> u32;
    fn side_to_move(&self) -> Color;
}

impl RulesOracle for GameState {
    #[inline]
    fn legal_moves(&self) -> Vec<Move> {
        GameState::legal_moves(self)
    }

    #[inline]
    fn apply_move(&mut self, mv: &Move) {
        self.make_move(mv);
    }

    #[inline]
    fn undo_move(&mut self, mv: &Move) {
        self.unmake_move(mv);
    }

    #[inline]
    fn is_check(&self) -> bool {
        self.is_in_check(self.side_to_move)
    }

    #[inline]
    fn is_checkmate(&self) -> bool {
        GameState::is_checkmate(self)
    }

    #[inline]
    fn is_draw(&self) -> bool {
        GameState::is_draw(self)
    }

    #[inline]
    fn square_attacked_by_opponent(&self, square: Square) -> bool {
        self.is_square_attacked(square, self.side_to_move.opposite())
    }

    fn try_skip_turn(&mut self) -> bool {
        let passed = self.make_null_move();
        if !passed {
            trace!("pass refused at ply {}: side to move is in check", self.ply);
        }
        passed
    }

    #[inline]
    fn undo_skip_turn(&mut self) {
        self.unmake_null_move();
    }

    #[inline]
    fn ply_count(&self) -> u32 {
        self.ply
    }

    #[inline]
    fn side_to_move(&self) -> Color {
        self.side_to_move
    }
}
