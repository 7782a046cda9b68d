//! Scoped make/undo on a rules oracle.
//!
//! `play` and `try_pass` hand out guards that take the move (or pass) back
//! when dropped, so every probe leaves the position exactly as it found it.
//! Guards deref to the oracle, which lets a probe nest a reply probe inside
//! its own scope.

use std::ops::{Deref, DerefMut};

use crate::moves::chess_move::Move;
use crate::rules::rules_oracle::RulesOracle;

/// A move applied for the lifetime of the guard.
#[must_use = "dropping the guard immediately undoes the move"]
pub struct MoveGuard<'a, O: RulesOracle + ?Sized> {
    oracle: &'a mut O,
    mv: Move,
}

impl<O: RulesOracle + ?Sized> MoveGuard<'_, O> {
    #[inline]
    pub fn played(&self) -> &Move {
        &self.mv
    }
}

impl<O: RulesOracle + ?Sized> Deref for MoveGuard<'_, O> {
    type Target = O;

    fn deref(&self) -> &O {
        &*self.oracle
    }
}

impl<O: RulesOracle + ?Sized> DerefMut for MoveGuard<'_, O> {
    fn deref_mut(&mut self) -> &mut O {
        &mut *self.oracle
    }
}

impl<O: RulesOracle + ?Sized> Drop for MoveGuard<'_, O> {
    fn drop(&mut self) {
        self.oracle.undo_move(&self.mv);
    }
}

/// A passed turn, taken back on drop.
#[must_use = "dropping the guard immediately takes the pass back"]
pub struct PassGuard<'a, O: RulesOracle + ?Sized> {
    oracle: &'a mut O,
}

impl<O: RulesOracle + ?Sized> Deref for PassGuard<'_, O> {
    type Target = O;

    fn deref(&self) -> &O {
        &*self.oracle
    }
}

impl<O: RulesOracle + ?Sized> DerefMut for PassGuard<'_, O> {
    fn deref_mut(&mut self) -> &mut O {
        &mut *self.oracle
    }
}

impl<O: RulesOracle + ?Sized> Drop for PassGuard<'_, O> {
    fn drop(&mut self) {
        self.oracle.undo_skip_turn();
    }
}

pub trait Simulate: RulesOracle {
    /// Apply `mv` until the returned guard is dropped.
    fn play(&mut self, mv: &Move) -> MoveGuard<'_, Self> {
        self.apply_move(mv);
        MoveGuard { oracle: self, mv: *mv }
    }

    /// Pass the turn until the returned guard is dropped; `None` when the
    /// oracle refuses the pass.
    fn try_pass(&mut self) -> Option<PassGuard<'_, Self>> {
        if self.try_skip_turn() {
            Some(PassGuard { oracle: self })
        } else {
            None
        }
    }
}

impl<O: RulesOracle + ?Sized> Simulate for O {}

#[cfg(test)]
mod tests {
    use super::Simulate;
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;
    use crate::rules::rules_oracle::RulesOracle;

    #[test]
    fn guard_undoes_on_drop() {
        let mut game = GameState::new_game();
        let before = game.get_fen();
        let mv = game.legal_moves()[0];

        {
            let guard = game.play(&mv);
            assert_eq!(guard.ply_count(), 1);
            assert_eq!(guard.played(), &mv);
        }
        assert_eq!(game.get_fen(), before);
        assert!(game.undo_stack.is_empty());
    }

    #[test]
    fn nested_guards_unwind_in_stack_order() {
        let mut game = GameState::new_game();
        let before = game.get_fen();
        let mv = game.legal_moves()[0];

        let reply_count = {
            let mut outer = game.play(&mv);
            let replies = RulesOracle::legal_moves(&*outer);
            let reply = replies[0];
            let inner = outer.play(&reply);
            assert_eq!(inner.ply_count(), 2);
            replies.len()
        };

        assert_eq!(reply_count, 20);
        assert_eq!(game.get_fen(), before);
        assert_eq!(game.repetition_history.len(), 1);
    }

    #[test]
    fn pass_guard_restores_side_to_move() {
        let mut game = GameState::new_game();
        {
            let pass = game.try_pass().expect("pass should be allowed");
            assert_eq!(RulesOracle::side_to_move(&*pass), Color::Dark);
        }
        assert_eq!(game.side_to_move, Color::Light);

        let mut checked = GameState::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1").expect("FEN should parse");
        assert!(checked.try_pass().is_none());
        assert!(checked.undo_stack.is_empty());
    }
}
