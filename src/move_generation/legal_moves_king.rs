use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_pieces::generate_piece_moves;
use crate::moves::attack_tables::king_attacks;
use crate::moves::chess_move::Move;

pub fn generate_king_moves(game_state: &GameState, out: &mut Vec<Move>) {
    generate_piece_moves(game_state, PieceKind::King, out, |from, _| king_attacks(from));

    if let Some(king) = game_state.king_square(game_state.side_to_move) {
        generate_castling_moves(game_state, king, out);
    }
}

/// Castles whose rights are held, whose path is empty and whose king path
/// (start, transit, destination) is unattacked.
fn generate_castling_moves(game_state: &GameState, king: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();

    let (rank, kingside, queenside) = match side {
        Color::Light => (0, CASTLE_LIGHT_KINGSIDE, CASTLE_LIGHT_QUEENSIDE),
        Color::Dark => (7, CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE),
    };

    if king != Square::from_rank_file(rank, 4) || game_state.is_square_attacked(king, enemy) {
        return;
    }

    let rooks = game_state.pieces[side.index()][PieceKind::Rook.index()];
    let at = |file: u8| Square::from_rank_file(rank, file);

    // (right, rook file, squares that must be empty, squares the king crosses, king target file)
    let wings: [(CastlingRights, u8, &[u8], [u8; 2], u8); 2] = [
        (kingside, 7, &[5, 6], [5, 6], 6),
        (queenside, 0, &[1, 2, 3], [3, 2], 2),
    ];

    for (right, rook_file, empty_files, transit_files, target_file) in wings {
        if game_state.castling_rights & right == 0 || rooks & at(rook_file).bit() == 0 {
            continue;
        }
        if empty_files
            .iter()
            .any(|&file| game_state.occupancy_all & at(file).bit() != 0)
        {
            continue;
        }
        if transit_files
            .iter()
            .any(|&file| game_state.is_square_attacked(at(file), enemy))
        {
            continue;
        }

        out.push(Move {
            is_castle: true,
            ..Move::quiet(king, at(target_file), PieceKind::King)
        });
    }
}
