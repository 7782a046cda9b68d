//! Bitboard edits for making and unmaking a move.
//!
//! The same edit is used by `GameState::make_move` and by the legality probe
//! in the generator, which applies it to a scratch copy of the piece boards.

use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

type PieceBoards = [[u64; 6]; 2];

/// Rook start and destination squares for a castle landing the king on `king_target`.
pub fn castle_rook_squares(king_target: Square) -> (Square, Square) {
    match king_target.index() {
        6 => (Square::new(7), Square::new(5)),
        2 => (Square::new(0), Square::new(3)),
        62 => (Square::new(63), Square::new(61)),
        58 => (Square::new(56), Square::new(59)),
        other => panic!("castle cannot land the king on square {other}"),
    }
}

pub fn apply_to_pieces(pieces: &mut PieceBoards, mover: Color, mv: &Move) {
    let own = mover.index();
    let enemy = mover.opposite().index();

    pieces[own][mv.moving_piece.index()] &= !mv.start.bit();

    if mv.is_en_passant {
        pieces[enemy][PieceKind::Pawn.index()] &= !mv.en_passant_victim().bit();
    } else if let Some(captured) = mv.captured_piece {
        pieces[enemy][captured.index()] &= !mv.target.bit();
    }

    let placed = mv.promotion_piece.unwrap_or(mv.moving_piece);
    pieces[own][placed.index()] |= mv.target.bit();

    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_squares(mv.target);
        pieces[own][PieceKind::Rook.index()] ^= rook_from.bit() | rook_to.bit();
    }
}

/// Exact inverse of [`apply_to_pieces`].
pub fn revert_on_pieces(pieces: &mut PieceBoards, mover: Color, mv: &Move) {
    let own = mover.index();
    let enemy = mover.opposite().index();

    let placed = mv.promotion_piece.unwrap_or(mv.moving_piece);
    pieces[own][placed.index()] &= !mv.target.bit();
    pieces[own][mv.moving_piece.index()] |= mv.start.bit();

    if mv.is_en_passant {
        pieces[enemy][PieceKind::Pawn.index()] |= mv.en_passant_victim().bit();
    } else if let Some(captured) = mv.captured_piece {
        pieces[enemy][captured.index()] |= mv.target.bit();
    }

    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_squares(mv.target);
        pieces[own][PieceKind::Rook.index()] ^= rook_from.bit() | rook_to.bit();
    }
}

pub fn updated_castling_rights(rights: CastlingRights, mover: Color, mv: &Move) -> CastlingRights {
    let mut rights = rights;

    if mv.moving_piece == PieceKind::King {
        rights &= match mover {
            Color::Light => !(CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE),
            Color::Dark => !(CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE),
        };
    }

    // Moving from or capturing on a rook corner drops that corner's right.
    for corner in [mv.start, mv.target] {
        rights &= match corner.index() {
            0 => !CASTLE_LIGHT_QUEENSIDE,
            7 => !CASTLE_LIGHT_KINGSIDE,
            56 => !CASTLE_DARK_QUEENSIDE,
            63 => !CASTLE_DARK_KINGSIDE,
            _ => !0,
        };
    }

    rights
}
