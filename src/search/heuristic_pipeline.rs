//! Layered heuristic move selection.
//!
//! One turn runs a fixed chain of stages over the legal moves. Each stage
//! either passes or replaces the current pick with the first move of its own
//! candidate list, so later stages win. En passant short-circuits the chain
//! up front and an immediate mate short-circuits the final capture scan.
//!
//! Stage order:
//! 1. en passant (forced)
//! 2. preferred pool: safe, sound moves ordered minor pieces first
//! 3. development out of the home ranks
//! 4. castling
//! 5. scripted opening
//! 6. rescue of an attacked, undefended piece
//! 7. safe check
//! 8. endgame pawn push
//! 9. queen promotion
//! 10. mate, else best non-losing capture

use std::fmt;

use log::debug;

use crate::engines::engine_config::ScholarConfig;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::moves::chess_move::Move;
use crate::rules::rules_oracle::RulesOracle;
use crate::search::piece_values::{capture_value, development_distance, piece_value};
use crate::search::tactics::{CaptureScan, TacticalSimulator};

/// Stage that produced the final pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionStage {
    /// First generated legal move; no stage fired.
    Fallback,
    EnPassant,
    Preferred,
    Development,
    Castling,
    OpeningBook,
    Protection,
    SafeCheck,
    EndgamePawnPush,
    Promotion,
    Capture,
    Checkmate,
}

impl SelectionStage {
    pub const fn label(self) -> &'static str {
        match self {
            SelectionStage::Fallback => "fallback",
            SelectionStage::EnPassant => "en_passant",
            SelectionStage::Preferred => "preferred",
            SelectionStage::Development => "development",
            SelectionStage::Castling => "castling",
            SelectionStage::OpeningBook => "opening_book",
            SelectionStage::Protection => "protection",
            SelectionStage::SafeCheck => "safe_check",
            SelectionStage::EndgamePawnPush => "endgame_pawn_push",
            SelectionStage::Promotion => "promotion",
            SelectionStage::Capture => "capture",
            SelectionStage::Checkmate => "checkmate",
        }
    }
}

impl fmt::Display for SelectionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub best_move: Move,
    pub stage: SelectionStage,
}

impl Decision {
    #[inline]
    pub const fn new(best_move: Move, stage: SelectionStage) -> Self {
        Self { best_move, stage }
    }
}

/// Pick one move for the side to move.
///
/// # Panics
/// Panics when the position has no legal moves; game termination is the
/// caller's concern.
pub fn decide<O: RulesOracle + ?Sized>(oracle: &mut O, config: &ScholarConfig) -> Decision {
    let moves = oracle.legal_moves();
    assert!(
        !moves.is_empty(),
        "decide requires a position with at least one legal move"
    );

    if let Some(en_passant) = moves.iter().find(|mv| mv.is_en_passant) {
        debug!("stage {} selects {en_passant}", SelectionStage::EnPassant);
        return Decision::new(*en_passant, SelectionStage::EnPassant);
    }

    let mut turn = TurnContext::new(oracle, &moves, config);
    let mut decision = Decision::new(moves[0], SelectionStage::Fallback);

    let overrides = [
        (SelectionStage::Preferred, turn.preferred.first().copied()),
        (SelectionStage::Development, turn.developing_move()),
        (SelectionStage::Castling, turn.castling_move()),
        (SelectionStage::OpeningBook, turn.scripted_move()),
        (SelectionStage::Protection, turn.protective_move()),
        (SelectionStage::SafeCheck, turn.safe_check()),
        (SelectionStage::EndgamePawnPush, turn.endgame_pawn_push()),
        (SelectionStage::Promotion, turn.queen_promotion()),
    ];
    for (stage, candidate) in overrides {
        if let Some(mv) = candidate {
            debug!("stage {stage} selects {mv}");
            decision = Decision::new(mv, stage);
        }
    }

    if let Some((mv, stage)) = turn.mate_or_capture() {
        debug!("stage {stage} selects {mv}");
        decision = Decision::new(mv, stage);
    }

    debug!(
        "ply {} decided {} by {} stage ({} legal, {} preferred)",
        turn.ply,
        decision.best_move,
        decision.stage,
        moves.len(),
        turn.preferred.len()
    );
    decision
}

/// Per-turn state shared by the stages.
struct TurnContext<'a, O: RulesOracle + ?Sized> {
    simulator: TacticalSimulator<'a, O>,
    moves: &'a [Move],
    preferred: Vec<Move>,
    config: &'a ScholarConfig,
    mover: Color,
    ply: u32,
}

impl<'a, O: RulesOracle + ?Sized> TurnContext<'a, O> {
    fn new(oracle: &'a mut O, moves: &'a [Move], config: &'a ScholarConfig) -> Self {
        let mover = oracle.side_to_move();
        let ply = oracle.ply_count();
        let simulator = TacticalSimulator::new(oracle).with_check_bonus(config.capture_check_bonus);

        let mut turn = Self {
            simulator,
            moves,
            preferred: Vec::new(),
            config,
            mover,
            ply,
        };
        turn.preferred = turn.preferred_moves();
        turn
    }

    fn target_attacked(&self, mv: &Move) -> bool {
        self.simulator.oracle().square_attacked_by_opponent(mv.target)
    }

    /// Moves that keep the king home, land on unattacked squares, promote
    /// only to a queen and neither draw, allow mate in one nor lose material.
    /// Stable-sorted so minor pieces come first.
    fn preferred_moves(&mut self) -> Vec<Move> {
        let mut preferred = Vec::with_capacity(self.moves.len());
        for mv in self.moves {
            let sound = (mv.moving_piece != PieceKind::King || mv.is_castle)
                && !self.target_attacked(mv)
                && matches!(mv.promotion_piece, None | Some(PieceKind::Queen))
                && !self.simulator.is_draw_after(mv)
                && !self.simulator.allows_mate_in_one_after(mv)
                && !self.simulator.is_sacrifice(mv, capture_value(mv));
            if sound {
                preferred.push(*mv);
            }
        }
        preferred.sort_by_key(development_distance);
        preferred
    }

    fn developing_move(&self) -> Option<Move> {
        self.preferred
            .iter()
            .find(|mv| {
                self.mover.is_home_rank(mv.start.rank()) && !self.mover.is_home_rank(mv.target.rank())
            })
            .copied()
    }

    fn castling_move(&self) -> Option<Move> {
        self.moves.iter().find(|mv| mv.is_castle).copied()
    }

    fn scripted_move(&self) -> Option<Move> {
        let step = self.config.opening_script.as_ref()?.step_for_ply(self.ply)?;
        self.preferred.iter().find(|mv| step.matches(mv)).copied()
    }

    /// Moves rescuing an attacked piece that its own side does not defend,
    /// to a safe square or by a capture worth at least the piece.
    fn protective_move(&mut self) -> Option<Move> {
        let mut rescues = Vec::new();
        for mv in self.moves {
            let oracle = self.simulator.oracle();
            if !oracle.square_attacked_by_opponent(mv.start) {
                continue;
            }
            let safe_landing = !oracle.square_attacked_by_opponent(mv.target)
                || capture_value(mv) >= piece_value(mv.moving_piece);
            if safe_landing && !self.simulator.is_protected(mv.start) {
                rescues.push(*mv);
            }
        }

        rescues
            .iter()
            .find(|mv| self.preferred.contains(mv))
            .or_else(|| rescues.first())
            .copied()
    }

    fn safe_check(&mut self) -> Option<Move> {
        let simulator = &mut self.simulator;
        self.preferred
            .iter()
            .find(|mv| simulator.is_check_after(mv))
            .copied()
    }

    fn endgame_pawn_push(&self) -> Option<Move> {
        if self.ply <= self.config.endgame_ply_threshold {
            return None;
        }
        self.preferred
            .iter()
            .find(|mv| mv.moving_piece == PieceKind::Pawn && !self.target_attacked(mv))
            .copied()
    }

    fn queen_promotion(&self) -> Option<Move> {
        self.preferred
            .iter()
            .find(|mv| mv.promotion_piece == Some(PieceKind::Queen))
            .copied()
    }

    /// One pass over every legal move in generation order: a mating move
    /// wins outright, otherwise the last capture that raised the running
    /// maximum without being a sacrifice. A sacrifice still raises the
    /// maximum, so smaller captures seen after it cannot be selected.
    fn mate_or_capture(&mut self) -> Option<(Move, SelectionStage)> {
        let mut scan = CaptureScan::default();
        let mut selected = None;

        for mv in self.moves {
            if self.simulator.is_checkmate_after(mv) {
                return Some((*mv, SelectionStage::Checkmate));
            }

            if scan.consider(&mut self.simulator, mv)
                && !self.simulator.is_sacrifice(mv, capture_value(mv))
            {
                selected = Some((*mv, SelectionStage::Capture));
            }
        }
        selected
    }
}
