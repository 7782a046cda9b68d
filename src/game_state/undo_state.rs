use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

/// Single undo record for `make_move` / `unmake_move` and null moves.
///
/// `mv` is `None` for a pass-turn record.
#[derive(Debug, Clone)]
pub struct UndoState {
    pub mv: Option<Move>,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,

    pub prev_zobrist_key: u64,
}
