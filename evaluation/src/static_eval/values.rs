use chess::Piece;

use crate::scores::Score;

// Relative weights; the ratios are what the search reacts to.
pub const PAWN_VALUE: Score = 10.0;
pub const KNIGHT_VALUE: Score = 30.0;
pub const BISHOP_VALUE: Score = 30.0;
pub const ROOK_VALUE: Score = 50.0;
pub const QUEEN_VALUE: Score = 90.0;
pub const KING_VALUE: Score = 900.0;

#[inline(always)]
pub fn piece_value(piece: Piece) -> Score {
    match piece {
        Piece::Pawn => PAWN_VALUE,
        Piece::Knight => KNIGHT_VALUE,
        Piece::Bishop => BISHOP_VALUE,
        Piece::Rook => ROOK_VALUE,
        Piece::Queen => QUEEN_VALUE,
        Piece::King => KING_VALUE,
    }
}
