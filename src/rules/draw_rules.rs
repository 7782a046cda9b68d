//! Draw detection for the host game state.
//!
//! Covers stalemate, the fifty-move rule, insufficient mating material and
//! repetition. A position counts as repeated as soon as it occurred once
//! before since the last irreversible move.

use crate::game_state::chess_rules::FIFTY_MOVE_HALFMOVES;
use crate::game_state::{chess_types::*, game_state::GameState};

impl GameState {
    #[inline]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= FIFTY_MOVE_HALFMOVES
    }

    /// Neither side can possibly mate: bare kings, a single minor piece, or
    /// only bishops that all stand on one square colour.
    pub fn is_insufficient_material(&self) -> bool {
        let heavy_or_pawn = [PieceKind::Pawn, PieceKind::Rook, PieceKind::Queen]
            .into_iter()
            .any(|piece| self.pieces_of_kind(piece) != 0);
        if heavy_or_pawn {
            return false;
        }

        let knights = self.pieces_of_kind(PieceKind::Knight);
        let bishops = self.pieces_of_kind(PieceKind::Bishop);
        if (knights | bishops).count_ones() <= 1 {
            return true;
        }
        if knights != 0 {
            return false;
        }

        let mut colours = Square::iter_bits(bishops).map(Square::is_light);
        let first = colours.next();
        colours.all(|colour| Some(colour) == first)
    }

    /// The current position already appeared with the same side to move
    /// since the halfmove clock was last reset.
    pub fn is_repetition(&self) -> bool {
        let Some((&current, earlier)) = self.repetition_history.split_last() else {
            return false;
        };
        let window = usize::from(self.halfmove_clock).min(earlier.len());

        earlier[earlier.len() - window..]
            .iter()
            .rev()
            .skip(1)
            .step_by(2)
            .any(|&key| key == current)
    }

    pub fn is_draw(&self) -> bool {
        self.is_fifty_move_draw()
            || self.is_insufficient_material()
            || self.is_repetition()
            || self.is_stalemate()
    }

    #[inline]
    fn pieces_of_kind(&self, piece: PieceKind) -> u64 {
        self.pieces[Color::Light.index()][piece.index()]
            | self.pieces[Color::Dark.index()][piece.index()]
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::game_state::GameState;

    fn play(game: &mut GameState, lan: &str) {
        let mv = game
            .legal_moves()
            .into_iter()
            .find(|mv| mv.to_string() == lan)
            .unwrap_or_else(|| panic!("{lan} should be legal"));
        game.make_move(&mv);
    }

    #[test]
    fn knight_shuffle_repeats_after_four_plies() {
        let mut game = GameState::new_game();
        for lan in ["g1f3", "g8f6", "f3g1"] {
            play(&mut game, lan);
            assert!(!game.is_repetition(), "{lan} should not repeat yet");
        }
        play(&mut game, "f6g8");
        assert!(game.is_repetition());
        assert!(game.is_draw());
    }

    #[test]
    fn pawn_move_clears_the_repetition_window() {
        let mut game = GameState::new_game();
        for lan in ["g1f3", "g8f6", "f3g1", "e7e6"] {
            play(&mut game, lan);
            assert!(!game.is_repetition(), "{lan} should not repeat");
        }
        assert_eq!(game.halfmove_clock, 0);

        for lan in ["g1f3", "f6g8", "f3g1"] {
            play(&mut game, lan);
            assert!(!game.is_repetition(), "{lan} should not repeat after the pawn move");
        }
        play(&mut game, "g8f6");
        assert_eq!(game.halfmove_clock, 4);
        assert!(game.is_repetition());
    }

    #[test]
    fn material_draws() {
        let cases = [
            ("4k3/8/8/8/8/8/8/4K3 w - - 0 1", true),
            ("4k3/8/8/8/8/8/8/2N1K3 w - - 0 1", true),
            ("4k3/8/8/8/8/8/8/2B1KB2 w - - 0 1", false),
            ("2b1k3/8/8/8/8/8/8/4KB2 w - - 0 1", true),
            ("4k3/8/8/8/8/8/8/1NN1K3 w - - 0 1", false),
            ("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1", false),
        ];
        for (fen, expected) in cases {
            let game = GameState::from_fen(fen).expect("FEN should parse");
            assert_eq!(game.is_insufficient_material(), expected, "{fen}");
        }
    }

    #[test]
    fn fifty_move_and_stalemate_are_draws() {
        let clock = GameState::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 100 80").expect("FEN should parse");
        assert!(clock.is_fifty_move_draw());
        assert!(clock.is_draw());

        let stalemate = GameState::from_fen("k7/2Q5/1K6/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert!(stalemate.is_stalemate());
        assert!(stalemate.is_draw());
    }
}
