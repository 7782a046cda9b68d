//! FEN-to-GameState parser.
//!
//! Builds fully-populated incremental state from a Forsyth-Edwards Notation
//! string: piece bitboards, rights, clocks, occupancies, the derived ply count
//! and the seeded repetition history.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::game_state::zobrist::compute_zobrist_key;
use crate::utils::algebraic::algebraic_to_square;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("missing {0} field in FEN")]
    MissingField(&'static str),

    #[error("FEN has extra trailing fields")]
    TrailingFields,

    #[error("board layout must contain 8 ranks, found {0}")]
    RankCount(usize),

    #[error("rank {rank} does not describe exactly 8 files")]
    RankWidth { rank: usize },

    #[error("invalid piece character '{0}' in board layout")]
    InvalidPiece(char),

    #[error("pawn placed on back rank at {0}")]
    PawnOnBackRank(Square),

    #[error("expected exactly one {0:?} king")]
    KingCount(Color),

    #[error("invalid side-to-move field: {0}")]
    InvalidSide(String),

    #[error("invalid castling rights field: {0}")]
    InvalidCastling(String),

    #[error("invalid en-passant square: {0}")]
    InvalidEnPassant(String),

    #[error("invalid {field} counter: {value}")]
    InvalidCounter { field: &'static str, value: String },
}

pub fn parse_fen(fen: &str) -> Result<GameState, FenError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or(FenError::MissingField("board"))?;
    let side_part = parts.next().ok_or(FenError::MissingField("side-to-move"))?;
    let castling_part = parts.next().ok_or(FenError::MissingField("castling"))?;
    let en_passant_part = parts.next().ok_or(FenError::MissingField("en-passant"))?;
    let halfmove_part = parts.next().ok_or(FenError::MissingField("halfmove"))?;
    let fullmove_part = parts.next().ok_or(FenError::MissingField("fullmove"))?;

    if parts.next().is_some() {
        return Err(FenError::TrailingFields);
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part)?;
    game_state.halfmove_clock = parse_counter("halfmove", halfmove_part)?;
    game_state.fullmove_number = parse_counter("fullmove", fullmove_part)?;

    let dark_to_move = u32::from(game_state.side_to_move == Color::Dark);
    game_state.ply = u32::from(game_state.fullmove_number.max(1) - 1) * 2 + dark_to_move;

    game_state.recalc_occupancy();
    game_state.zobrist_key = compute_zobrist_key(&game_state);
    game_state.repetition_history.push(game_state.zobrist_key);

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), FenError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = (7 - fen_rank_idx) as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(FenError::InvalidPiece(ch));
                }
                file += empty_count as u8;
                continue;
            }

            let piece = PieceKind::from_fen_char(ch).ok_or(FenError::InvalidPiece(ch))?;
            let color = if ch.is_ascii_uppercase() {
                Color::Light
            } else {
                Color::Dark
            };

            if file >= 8 {
                return Err(FenError::RankWidth { rank: fen_rank_idx });
            }

            let sq = Square::from_rank_file(board_rank, file);
            if piece == PieceKind::Pawn && (board_rank == 0 || board_rank == 7) {
                return Err(FenError::PawnOnBackRank(sq));
            }
            game_state.pieces[color.index()][piece.index()] |= sq.bit();
            file += 1;
        }

        if file != 8 {
            return Err(FenError::RankWidth { rank: fen_rank_idx });
        }
    }

    for color in [Color::Light, Color::Dark] {
        if game_state.pieces[color.index()][PieceKind::King.index()].count_ones() != 1 {
            return Err(FenError::KingCount(color));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenError> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(FenError::InvalidSide(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, FenError> {
    if castling_part == "-" {
        return Ok(0);
    }

    castling_part.chars().try_fold(0, |rights, ch| {
        let right = match ch {
            'K' => CASTLE_LIGHT_KINGSIDE,
            'Q' => CASTLE_LIGHT_QUEENSIDE,
            'k' => CASTLE_DARK_KINGSIDE,
            'q' => CASTLE_DARK_QUEENSIDE,
            _ => return Err(FenError::InvalidCastling(castling_part.to_owned())),
        };
        Ok(rights | right)
    })
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, FenError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| FenError::InvalidEnPassant(en_passant_part.to_owned()))?;
    if square.rank() != 2 && square.rank() != 5 {
        return Err(FenError::InvalidEnPassant(en_passant_part.to_owned()));
    }
    Ok(Some(square))
}

fn parse_counter(field: &'static str, value: &str) -> Result<u16, FenError> {
    value.parse::<u16>().map_err(|_| FenError::InvalidCounter {
        field,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_fen, FenError};
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::Color;

    #[test]
    fn parse_starting_fen() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(game_state.side_to_move, Color::Light);
        assert_eq!(game_state.fullmove_number, 1);
        assert_eq!(game_state.halfmove_clock, 0);
        assert_eq!(game_state.ply, 0);
        assert_eq!(game_state.occupancy_all.count_ones(), 32);
        assert_eq!(game_state.repetition_history, vec![game_state.zobrist_key]);
    }

    #[test]
    fn ply_is_derived_from_fullmove_and_side() {
        let game = parse_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 23").expect("FEN should parse");
        assert_eq!(game.ply, 45);
    }

    #[test]
    fn malformed_fields_are_reported() {
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - -").unwrap_err(),
            FenError::MissingField("halfmove")
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1").unwrap_err(),
            FenError::InvalidSide("x".to_owned())
        );
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/P3K3 w - - 0 1"),
            Err(FenError::PawnOnBackRank(_))
        ));
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").unwrap_err(),
            FenError::KingCount(Color::Dark)
        );
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/4K2 w - - 0 1"),
            Err(FenError::RankWidth { rank: 7 })
        ));
    }
}
