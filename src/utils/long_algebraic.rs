//! Long algebraic (`e2e4`, `e7e8q`) lookup against the legal move list.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;
use crate::utils::algebraic::{algebraic_to_square, NotationError};

/// Resolve long algebraic text to the matching legal move of `game_state`.
pub fn long_algebraic_to_move(
    long_algebraic: &str,
    game_state: &GameState,
) -> Result<Move, NotationError> {
    let invalid = || NotationError::InvalidMove(long_algebraic.to_owned());

    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&long_algebraic[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&long_algebraic[2..4]).map_err(|_| invalid())?;
    let promotion = match long_algebraic[4..].chars().next() {
        None => None,
        Some(ch) => Some(
            PieceKind::from_fen_char(ch)
                .filter(|piece| !matches!(piece, PieceKind::Pawn | PieceKind::King))
                .ok_or_else(invalid)?,
        ),
    };

    game_state
        .legal_moves()
        .into_iter()
        .find(|mv| mv.start == from && mv.target == to && mv.promotion_piece == promotion)
        .ok_or_else(|| NotationError::NoSuchMove(long_algebraic.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::long_algebraic_to_move;
    use crate::game_state::chess_types::PieceKind;
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::NotationError;

    #[test]
    fn resolves_double_push_and_promotion() {
        let game = GameState::new_game();
        let mv = long_algebraic_to_move("e2e4", &game).expect("e2e4 should be legal");
        assert!(mv.is_double_pawn_push());

        let promo_game = GameState::from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1").expect("FEN should parse");
        let promo = long_algebraic_to_move("a7a8n", &promo_game).expect("underpromotion should be legal");
        assert_eq!(promo.promotion_piece, Some(PieceKind::Knight));
    }

    #[test]
    fn rejects_malformed_and_illegal_text() {
        let game = GameState::new_game();
        assert_eq!(
            long_algebraic_to_move("e2", &game),
            Err(NotationError::InvalidMove("e2".to_owned()))
        );
        assert_eq!(
            long_algebraic_to_move("e2e5", &game),
            Err(NotationError::NoSuchMove("e2e5".to_owned()))
        );
    }
}
