//! Perft node counting for validating the host move generator.

use crate::game_state::game_state::GameState;

/// Count leaf nodes `depth` plies below `game_state`, making and unmaking in place.
pub fn perft(game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game_state.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in &moves {
        game_state.make_move(mv);
        nodes += perft(game_state, depth - 1);
        game_state.unmake_move(mv);
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::game_state::GameState;

    #[test]
    fn perft_start_position_depth_three() {
        let mut game = GameState::new_game();
        assert_eq!(perft(&mut game, 1), 20);
        assert_eq!(perft(&mut game, 2), 400);
        assert_eq!(perft(&mut game, 3), 8902);
    }

    #[test]
    fn perft_kiwipete_depth_two() {
        let mut game = GameState::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("FEN should parse");
        assert_eq!(perft(&mut game, 1), 48);
        assert_eq!(perft(&mut game, 2), 2039);
    }

    #[test]
    fn perft_endgame_position_depth_three() {
        let mut game =
            GameState::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").expect("FEN should parse");
        assert_eq!(perft(&mut game, 3), 2812);
    }

    #[test]
    fn perft_promotion_heavy_position() {
        let mut game = GameState::from_fen(
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        )
        .expect("FEN should parse");
        assert_eq!(perft(&mut game, 1), 6);
        assert_eq!(perft(&mut game, 2), 264);
        assert_eq!(perft(&mut game, 3), 9467);
    }
}
