use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::attack_tables::pawn_attacks;
use crate::moves::chess_move::Move;

/// Promotion pieces in the order they are emitted.
const PROMOTION_PIECES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

pub fn generate_pawn_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();
    let enemy_occ = game_state.occupancy_by_color[enemy.index()];
    let enemy_pawns = game_state.pieces[enemy.index()][PieceKind::Pawn.index()];

    let (forward, start_rank, promotion_rank): (i16, u8, u8) = match side {
        Color::Light => (8, 1, 7),
        Color::Dark => (-8, 6, 0),
    };

    for from in Square::iter_bits(game_state.pieces[side.index()][PieceKind::Pawn.index()]) {
        // The FEN parser rejects pawns on the back ranks, so one step stays on the board.
        let one_step = Square::new((i16::from(from.index()) + forward) as u8);

        if game_state.occupancy_all & one_step.bit() == 0 {
            push_pawn_move(out, from, one_step, None, promotion_rank);

            if from.rank() == start_rank {
                let two_step = Square::new((i16::from(one_step.index()) + forward) as u8);
                if game_state.occupancy_all & two_step.bit() == 0 {
                    out.push(Move::quiet(from, two_step, PieceKind::Pawn));
                }
            }
        }

        for target in Square::iter_bits(pawn_attacks(side, from)) {
            if enemy_occ & target.bit() != 0 {
                let captured = game_state.piece_on(target).map(|(_, piece)| piece);
                push_pawn_move(out, from, target, captured, promotion_rank);
            } else if game_state.en_passant_square == Some(target) {
                let mv = Move {
                    captured_piece: Some(PieceKind::Pawn),
                    is_en_passant: true,
                    ..Move::quiet(from, target, PieceKind::Pawn)
                };
                if enemy_pawns & mv.en_passant_victim().bit() != 0 {
                    out.push(mv);
                }
            }
        }
    }
}

fn push_pawn_move(
    out: &mut Vec<Move>,
    from: Square,
    to: Square,
    captured: Option<PieceKind>,
    promotion_rank: u8,
) {
    let base = Move {
        captured_piece: captured,
        ..Move::quiet(from, to, PieceKind::Pawn)
    };

    if to.rank() == promotion_rank {
        out.extend(PROMOTION_PIECES.iter().map(|&promo| Move {
            promotion_piece: Some(promo),
            ..base
        }));
    } else {
        out.push(base);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::game_state::GameState;

    fn pawn_moves(fen: &str) -> Vec<String> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game, &mut out);
        out.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn start_rank_pawn_has_single_and_double_push() {
        assert_eq!(pawn_moves("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1"), vec!["e2e3", "e2e4"]);
    }

    #[test]
    fn capture_promotion_emits_four_pieces() {
        let moves = pawn_moves("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(moves.len(), 8);
        assert!(moves.contains(&"a7b8q".to_owned()));
        assert!(moves.contains(&"a7a8n".to_owned()));
    }

    #[test]
    fn dark_en_passant_is_generated() {
        let moves = pawn_moves("4k3/8/8/8/3pP3/8/8/4K3 b - e3 0 1");
        assert_eq!(moves, vec!["d4d3", "d4e3"]);
    }
}
