//! Incremental board state with make/unmake.
//!
//! `GameState` is the host position the move picker probes. It stores piece
//! bitboards, occupancy caches, turn/state flags, clocks, the repetition
//! history and the undo stack that lets every probe restore the exact prior
//! state.

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::game_state::zobrist::compute_zobrist_key;
use crate::move_generation::legal_move_apply::{
    apply_to_pieces, revert_on_pieces, updated_castling_rights,
};
use crate::move_generation::legal_move_checks::is_square_attacked_on;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::chess_move::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::{parse_fen, FenError};

/// Incremental game state optimized for fast move making/unmaking.
#[derive(Debug, Clone)]
pub struct GameState {
    // --- Bitboard representation ---
    // [color][piece_kind]
    pub pieces: [[u64; 6]; 2],

    // Occupancy caches.
    pub occupancy_by_color: [u64; 2],
    pub occupancy_all: u64,

    // --- Side and state flags ---
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    // --- Clocks / move counters ---
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
    pub ply: u32,

    // --- Hashing / repetition support ---
    pub zobrist_key: u64,
    pub repetition_history: Vec<u64>,

    // --- Make/unmake stack ---
    pub undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,

            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,
            ply: 0,

            zobrist_key: 0,
            repetition_history: Vec::new(),
            undo_stack: Vec::new(),
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Piece and color standing on `square`, if any.
    pub fn piece_on(&self, square: Square) -> Option<(Color, PieceKind)> {
        let mask = square.bit();
        if self.occupancy_all & mask == 0 {
            return None;
        }
        let color = if self.occupancy_by_color[Color::Light.index()] & mask != 0 {
            Color::Light
        } else {
            Color::Dark
        };
        ALL_PIECE_KINDS
            .into_iter()
            .find(|piece| self.pieces[color.index()][piece.index()] & mask != 0)
            .map(|piece| (color, piece))
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let kings = self.pieces[color.index()][PieceKind::King.index()];
        (kings != 0).then(|| Square::new(kings.trailing_zeros() as u8))
    }

    #[inline]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        is_square_attacked_on(&self.pieces, self.occupancy_all, square, attacker)
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opposite()))
    }

    #[inline]
    pub fn legal_moves(&self) -> Vec<Move> {
        generate_legal_moves(self)
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_in_check(self.side_to_move) && self.legal_moves().is_empty()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check(self.side_to_move) && self.legal_moves().is_empty()
    }

    /// Play a legal move. The move must come from `legal_moves()` of this position.
    pub fn make_move(&mut self, mv: &Move) {
        self.push_undo(Some(*mv));

        let mover = self.side_to_move;
        apply_to_pieces(&mut self.pieces, mover, mv);

        self.castling_rights = updated_castling_rights(self.castling_rights, mover, mv);
        self.en_passant_square = mv
            .is_double_pawn_push()
            .then(|| Square::new((mv.start.index() + mv.target.index()) / 2));

        if mv.moving_piece == PieceKind::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        self.finish_turn(mover);
    }

    /// Take back `mv`, which must be the most recently made move.
    ///
    /// # Panics
    /// Panics when the undo stack is empty or its top record is a different
    /// move or a pass; both are broken make/unmake pairing.
    pub fn unmake_move(&mut self, mv: &Move) {
        let undo = self.pop_undo();
        assert_eq!(
            undo.mv.as_ref(),
            Some(mv),
            "unmake_move does not match the last made move"
        );

        let mover = self.side_to_move.opposite();
        revert_on_pieces(&mut self.pieces, mover, mv);
        self.restore(undo, mover);
    }

    /// Hand the turn to the opponent without moving. Refused while in check.
    pub fn make_null_move(&mut self) -> bool {
        if self.is_in_check(self.side_to_move) {
            return false;
        }

        self.push_undo(None);
        let mover = self.side_to_move;
        self.en_passant_square = None;
        self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        self.finish_turn(mover);
        true
    }

    /// # Panics
    /// Panics when the top undo record is not a pass.
    pub fn unmake_null_move(&mut self) {
        let undo = self.pop_undo();
        assert!(
            undo.mv.is_none(),
            "unmake_null_move called while a real move is on top of the undo stack"
        );
        let mover = self.side_to_move.opposite();
        self.restore(undo, mover);
    }

    pub(crate) fn recalc_occupancy(&mut self) {
        for color in [Color::Light, Color::Dark] {
            self.occupancy_by_color[color.index()] = self.pieces[color.index()]
                .iter()
                .fold(0u64, |acc, bb| acc | bb);
        }
        self.occupancy_all = self.occupancy_by_color[0] | self.occupancy_by_color[1];
    }

    fn push_undo(&mut self, mv: Option<Move>) {
        self.undo_stack.push(UndoState {
            mv,
            prev_castling_rights: self.castling_rights,
            prev_en_passant_square: self.en_passant_square,
            prev_halfmove_clock: self.halfmove_clock,
            prev_fullmove_number: self.fullmove_number,
            prev_zobrist_key: self.zobrist_key,
        });
    }

    fn pop_undo(&mut self) -> UndoState {
        match self.undo_stack.pop() {
            Some(undo) => undo,
            None => panic!("undo requested with an empty undo stack"),
        }
    }

    fn finish_turn(&mut self, mover: Color) {
        if mover == Color::Dark {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = mover.opposite();
        self.ply += 1;

        self.recalc_occupancy();
        self.zobrist_key = compute_zobrist_key(self);
        self.repetition_history.push(self.zobrist_key);
    }

    fn restore(&mut self, undo: UndoState, mover: Color) {
        self.castling_rights = undo.prev_castling_rights;
        self.en_passant_square = undo.prev_en_passant_square;
        self.halfmove_clock = undo.prev_halfmove_clock;
        self.fullmove_number = undo.prev_fullmove_number;
        self.zobrist_key = undo.prev_zobrist_key;
        self.side_to_move = mover;
        self.ply -= 1;
        self.repetition_history.pop();
        self.recalc_occupancy();
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_types::{Color, PieceKind};

    fn find(game: &GameState, lan: &str) -> crate::moves::chess_move::Move {
        game.legal_moves()
            .into_iter()
            .find(|mv| mv.to_string() == lan)
            .unwrap_or_else(|| panic!("{lan} should be legal"))
    }

    #[test]
    fn make_then_unmake_restores_every_field() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        let key = game.zobrist_key;

        for mv in game.legal_moves() {
            game.make_move(&mv);
            game.unmake_move(&mv);
            assert_eq!(game.get_fen(), fen, "after {mv}");
            assert_eq!(game.zobrist_key, key);
            assert_eq!(game.ply, 0);
        }
        assert!(game.undo_stack.is_empty());
        assert_eq!(game.repetition_history.len(), 1);
    }

    #[test]
    fn castling_moves_rook_and_clears_rights() {
        let mut game =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let castle = find(&game, "e1g1");
        assert!(castle.is_castle);
        game.make_move(&castle);
        assert_eq!(game.get_fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 1 1");
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mut game =
            GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").expect("FEN should parse");
        let ep = find(&game, "e5d6");
        assert!(ep.is_en_passant);
        game.make_move(&ep);
        assert_eq!(game.get_fen(), "4k3/8/3P4/8/8/8/8/4K3 b - - 0 2");
        game.unmake_move(&ep);
        assert_eq!(game.get_fen(), "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
    }

    #[test]
    fn null_move_flips_side_and_is_refused_in_check() {
        let mut game = GameState::new_game();
        assert!(game.make_null_move());
        assert_eq!(game.side_to_move, Color::Dark);
        assert_eq!(game.ply, 1);
        game.unmake_null_move();
        assert_eq!(game.get_fen(), GameState::new_game().get_fen());

        let mut checked =
            GameState::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1").expect("FEN should parse");
        assert!(!checked.make_null_move());
        assert!(checked.undo_stack.is_empty());
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn mismatched_unmake_panics() {
        let mut game = GameState::new_game();
        let moves = game.legal_moves();
        game.make_move(&moves[0]);
        game.unmake_move(&moves[1]);
    }

    #[test]
    fn piece_lookup_reports_color_and_kind() {
        let game = GameState::new_game();
        assert_eq!(
            game.piece_on("d8".parse().unwrap()),
            Some((Color::Dark, PieceKind::Queen))
        );
        assert_eq!(game.piece_on("e4".parse().unwrap()), None);
    }
}
