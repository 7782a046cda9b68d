use crate::game_state::chess_types::*;
use crate::moves::attack_tables::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks,
};

/// Whether any `attacker` piece on `pieces` hits `square` given `occupancy`.
pub fn is_square_attacked_on(
    pieces: &[[u64; 6]; 2],
    occupancy: u64,
    square: Square,
    attacker: Color,
) -> bool {
    let theirs = &pieces[attacker.index()];
    let diagonal = theirs[PieceKind::Bishop.index()] | theirs[PieceKind::Queen.index()];
    let straight = theirs[PieceKind::Rook.index()] | theirs[PieceKind::Queen.index()];

    // A pawn of `attacker` hits `square` iff it stands where a pawn of the
    // other color on `square` would attack.
    pawn_attacks(attacker.opposite(), square) & theirs[PieceKind::Pawn.index()] != 0
        || knight_attacks(square) & theirs[PieceKind::Knight.index()] != 0
        || king_attacks(square) & theirs[PieceKind::King.index()] != 0
        || bishop_attacks(square, occupancy) & diagonal != 0
        || rook_attacks(square, occupancy) & straight != 0
}

/// Whether `color`'s king would be attacked on the given piece boards.
pub fn king_attacked_on(pieces: &[[u64; 6]; 2], color: Color) -> bool {
    let kings = pieces[color.index()][PieceKind::King.index()];
    if kings == 0 {
        return false;
    }
    let occupancy = pieces.iter().flatten().fold(0u64, |acc, bb| acc | bb);
    let king = Square::new(kings.trailing_zeros() as u8);
    is_square_attacked_on(pieces, occupancy, king, color.opposite())
}
