//! Full legal move generation.
//!
//! Generates pseudo-legal moves piece kind by piece kind (pawns, knights,
//! bishops, rooks, queens, king) and drops those leaving the mover's own king
//! attacked. The emission order is stable, so the first legal move of a
//! position is always the same move.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_to_pieces;
use crate::move_generation::legal_move_checks::king_attacked_on;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_pieces::{
    generate_bishop_moves, generate_knight_moves, generate_queen_moves, generate_rook_moves,
};
use crate::moves::chess_move::Move;

pub fn generate_legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut moves = Vec::<Move>::with_capacity(64);

    generate_pawn_moves(game_state, &mut moves);
    generate_knight_moves(game_state, &mut moves);
    generate_bishop_moves(game_state, &mut moves);
    generate_rook_moves(game_state, &mut moves);
    generate_queen_moves(game_state, &mut moves);
    generate_king_moves(game_state, &mut moves);

    moves.retain(|mv| leaves_king_safe(game_state, mv));
    moves
}

fn leaves_king_safe(game_state: &GameState, mv: &Move) -> bool {
    let mover = game_state.side_to_move;
    let mut pieces = game_state.pieces;
    apply_to_pieces(&mut pieces, mover, mv);
    !king_attacked_on(&pieces, mover)
}

#[cfg(test)]
mod tests {
    use super::generate_legal_moves;
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_position_has_twenty_moves() {
        assert_eq!(generate_legal_moves(&GameState::new_game()).len(), 20);
    }

    #[test]
    fn pinned_piece_cannot_leave_the_pin_line() {
        // White bishop on e2 is pinned by the rook on e8.
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1").expect("FEN should parse");
        let moves = generate_legal_moves(&game);
        assert!(moves.iter().all(|mv| mv.moving_piece != crate::game_state::chess_types::PieceKind::Bishop));
    }

    #[test]
    fn en_passant_exposing_the_king_is_illegal() {
        // Capturing d6 would clear the fifth rank between the rook and king.
        let game = GameState::from_fen("4k3/8/8/K2pP2r/8/8/8/8 w - d6 0 1").expect("FEN should parse");
        assert!(generate_legal_moves(&game).iter().all(|mv| !mv.is_en_passant));
    }

    #[test]
    fn checkmate_has_no_legal_moves() {
        let game = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("FEN should parse");
        assert!(generate_legal_moves(&game).is_empty());
        assert!(game.is_checkmate());
    }
}
