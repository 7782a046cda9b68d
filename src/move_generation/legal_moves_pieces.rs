//! Knight, bishop, rook and queen moves: attack set minus own pieces.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::attack_tables::{bishop_attacks, knight_attacks, queen_attacks, rook_attacks};
use crate::moves::chess_move::Move;

pub fn generate_knight_moves(game_state: &GameState, out: &mut Vec<Move>) {
    generate_piece_moves(game_state, PieceKind::Knight, out, |from, _| knight_attacks(from));
}

pub fn generate_bishop_moves(game_state: &GameState, out: &mut Vec<Move>) {
    generate_piece_moves(game_state, PieceKind::Bishop, out, bishop_attacks);
}

pub fn generate_rook_moves(game_state: &GameState, out: &mut Vec<Move>) {
    generate_piece_moves(game_state, PieceKind::Rook, out, rook_attacks);
}

pub fn generate_queen_moves(game_state: &GameState, out: &mut Vec<Move>) {
    generate_piece_moves(game_state, PieceKind::Queen, out, queen_attacks);
}

/// Emit a move to every attacked square not holding an own piece.
pub(crate) fn generate_piece_moves(
    game_state: &GameState,
    piece: PieceKind,
    out: &mut Vec<Move>,
    attacks: impl Fn(Square, u64) -> u64,
) {
    let side = game_state.side_to_move;
    let own_occ = game_state.occupancy_by_color[side.index()];

    for from in Square::iter_bits(game_state.pieces[side.index()][piece.index()]) {
        let targets = attacks(from, game_state.occupancy_all) & !own_occ;
        for to in Square::iter_bits(targets) {
            out.push(Move {
                captured_piece: game_state.piece_on(to).map(|(_, captured)| captured),
                ..Move::quiet(from, to, piece)
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_in_corner_has_two_moves() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_knight_moves(&game, &mut out);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn rook_stops_on_capture_and_before_own_piece() {
        let game =
            GameState::from_fen("4k3/8/8/r7/8/8/8/R3K3 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_rook_moves(&game, &mut out);
        // a2, a3, a4, axa5 and b1, c1, d1.
        assert_eq!(out.len(), 7);
        let capture = out
            .iter()
            .find(|mv| mv.is_capture())
            .expect("rook should capture on a5");
        assert_eq!(capture.to_string(), "a1a5");
        assert_eq!(capture.captured_piece, Some(PieceKind::Rook));
    }
}
