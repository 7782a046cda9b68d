//! One-ply tactical probes.
//!
//! Every predicate plays the candidate move under a `MoveGuard`, inspects the
//! resulting position (at most one reply deep) and lets the guard take the
//! move back. Callers see the oracle unchanged on every return path.

use log::trace;

use crate::game_state::chess_types::Square;
use crate::moves::chess_move::Move;
use crate::rules::rules_oracle::RulesOracle;
use crate::search::piece_values::{capture_value, piece_value, CHECK_BONUS};
use crate::search::simulation::Simulate;

/// Running "best capture so far" of a single scan. A fresh scan starts at
/// zero, so only captures netting positive material can improve it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureScan {
    best: i32,
}

impl CaptureScan {
    #[inline]
    pub const fn best(&self) -> i32 {
        self.best
    }

    /// Score `mv` and raise the running maximum if it beats it. Returns
    /// whether it did.
    pub fn consider<O: RulesOracle + ?Sized>(
        &mut self,
        simulator: &mut TacticalSimulator<'_, O>,
        mv: &Move,
    ) -> bool {
        let score = simulator.capture_score(mv);
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }
}

pub struct TacticalSimulator<'a, O: RulesOracle + ?Sized> {
    oracle: &'a mut O,
    check_bonus: i32,
}

impl<'a, O: RulesOracle + ?Sized> TacticalSimulator<'a, O> {
    pub fn new(oracle: &'a mut O) -> Self {
        Self {
            oracle,
            check_bonus: CHECK_BONUS,
        }
    }

    pub fn with_check_bonus(mut self, check_bonus: i32) -> Self {
        self.check_bonus = check_bonus;
        self
    }

    #[inline]
    pub fn oracle(&self) -> &O {
        &*self.oracle
    }

    pub fn is_checkmate_after(&mut self, mv: &Move) -> bool {
        let after = self.oracle.play(mv);
        after.is_checkmate()
    }

    pub fn is_check_after(&mut self, mv: &Move) -> bool {
        let after = self.oracle.play(mv);
        after.is_check()
    }

    pub fn is_draw_after(&mut self, mv: &Move) -> bool {
        let after = self.oracle.play(mv);
        after.is_draw()
    }

    /// Some opponent reply to `mv` is checkmate.
    pub fn allows_mate_in_one_after(&mut self, mv: &Move) -> bool {
        let mut after = self.oracle.play(mv);
        let replies = after.legal_moves();
        let mated = replies.iter().any(|reply| after.play(reply).is_checkmate());
        if mated {
            trace!("{mv} allows mate in one");
        }
        mated
    }

    /// Net material of `mv` as a capture: the captured value, less the
    /// mover's value when the target is defended, otherwise plus the check
    /// bonus when the capture also gives check.
    pub fn capture_score(&mut self, mv: &Move) -> i32 {
        let mut score = capture_value(mv);
        if self.oracle.square_attacked_by_opponent(mv.target) {
            score -= piece_value(mv.moving_piece);
        } else if mv.is_capture() && self.check_bonus != 0 && self.is_check_after(mv) {
            score += self.check_bonus;
        }
        score
    }

    /// After `mv` the opponent has a reply capturing back more than
    /// `taken_value`. Each reply is scored by its own fresh scan.
    pub fn is_sacrifice(&mut self, mv: &Move, taken_value: i32) -> bool {
        let check_bonus = self.check_bonus;
        let mut after = self.oracle.play(mv);
        let replies = after.legal_moves();
        let mut replies_simulator = TacticalSimulator::new(&mut *after).with_check_bonus(check_bonus);

        let losing = replies.iter().any(|reply| {
            let mut scan = CaptureScan::default();
            scan.consider(&mut replies_simulator, reply) && scan.best() > taken_value
        });
        if losing {
            trace!("{mv} loses more than the {taken_value} it takes");
        }
        losing
    }

    /// The side to move still defends `square` when it hands the opponent
    /// the tempo. A refused pass counts as protected.
    pub fn is_protected(&mut self, square: Square) -> bool {
        match self.oracle.try_pass() {
            Some(passed) => passed.square_attacked_by_opponent(square),
            None => true,
        }
    }
}
