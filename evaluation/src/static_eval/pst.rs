use chess::{BitBoard, Color, Piece, Square};

use crate::scores::Score;

pub struct PSTRefs<'a> {
    pub pawn: &'a [Score; 64],
    pub knight: &'a [Score; 64],
    pub bishop: &'a [Score; 64],
    pub rook: &'a [Score; 64],
    pub queen: &'a [Score; 64],
    pub king: &'a [Score; 64],
}

impl PSTRefs<'_> {
    #[inline(always)]
    pub fn table(&self, piece: Piece) -> &[Score; 64] {
        match piece {
            Piece::Pawn => self.pawn,
            Piece::Knight => self.knight,
            Piece::Bishop => self.bishop,
            Piece::Rook => self.rook,
            Piece::Queen => self.queen,
            Piece::King => self.king,
        }
    }
}

#[inline(always)]
pub fn sum_pst(bitboard: BitBoard, table: &[Score; 64]) -> Score {
    let mut total = 0.0;
    for sq in bitboard {
        total += table[sq.to_index()];
    }
    total
}

#[inline(always)]
pub fn pst_value(piece: Piece, color: Color, square: Square) -> Score {
    get_pst(color).table(piece)[square.to_index()]
}

pub fn get_pst(color: Color) -> PSTRefs<'static> {
    match color {
        Color::White => PSTRefs {
            pawn: &WHITE_PAWN_PST,
            knight: &WHITE_KNIGHT_PST,
            bishop: &WHITE_BISHOP_PST,
            rook: &WHITE_ROOK_PST,
            queen: &WHITE_QUEEN_PST,
            king: &WHITE_KING_PST,
        },
        Color::Black => PSTRefs {
            pawn: &BLACK_PAWN_PST,
            knight: &BLACK_KNIGHT_PST,
            bishop: &BLACK_BISHOP_PST,
            rook: &BLACK_ROOK_PST,
            queen: &BLACK_QUEEN_PST,
            king: &BLACK_KING_PST,
        },
    }
}

// Black reads the White table with the rank axis flipped; files stay put.
const fn mirror_ranks(source: &[Score; 64]) -> [Score; 64] {
    let mut table = [0.0; 64];
    let mut i = 0;
    while i < 64 {
        table[i] = source[i ^ 56];
        i += 1;
    }
    table
}

// - Rewards pawns on the verge of promotion
// - Penalises leaving d2/e2 at home
pub const WHITE_PAWN_PST: [Score; 64] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, // RANK 1: a1..h1
    0.5, 1.0, 1.0, -2.0, -2.0, 1.0, 1.0, 0.5, // RANK 2
    0.5, -0.5, -1.0, 0.0, 0.0, -1.0, -0.5, 0.5, // RANK 3
    0.0, 0.0, 0.0, 2.0, 2.0, 0.0, 0.0, 0.0, // RANK 4
    0.5, 0.5, 1.0, 2.5, 2.5, 1.0, 0.5, 0.5, // RANK 5
    1.0, 1.0, 2.0, 3.0, 3.0, 2.0, 1.0, 1.0, // RANK 6
    5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, // RANK 7
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, // RANK 8
];
const BLACK_PAWN_PST: [Score; 64] = mirror_ranks(&WHITE_PAWN_PST);

// - Knights on the rim are dim
pub const WHITE_KNIGHT_PST: [Score; 64] = [
    -5.0, -4.0, -3.0, -3.0, -3.0, -3.0, -4.0, -5.0, // RANK 1: a1..h1
    -4.0, -2.0, 0.0, 0.5, 0.5, 0.0, -2.0, -4.0, // RANK 2
    -3.0, 0.5, 1.0, 1.5, 1.5, 1.0, 0.5, -3.0, // RANK 3
    -3.0, 0.0, 1.5, 2.0, 2.0, 1.5, 0.0, -3.0, // RANK 4
    -3.0, 0.5, 1.5, 2.0, 2.0, 1.5, 0.5, -3.0, // RANK 5
    -3.0, 0.0, 1.0, 1.5, 1.5, 1.0, 0.0, -3.0, // RANK 6
    -4.0, -2.0, 0.0, 0.0, 0.0, 0.0, -2.0, -4.0, // RANK 7
    -5.0, -4.0, -3.0, -3.0, -3.0, -3.0, -4.0, -5.0, // RANK 8
];
const BLACK_KNIGHT_PST: [Score; 64] = mirror_ranks(&WHITE_KNIGHT_PST);

// - Long diagonals and the centre, away from corners
pub const WHITE_BISHOP_PST: [Score; 64] = [
    -2.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -2.0, // RANK 1: a1..h1
    -1.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.5, -1.0, // RANK 2
    -1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, -1.0, // RANK 3
    -1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, -1.0, // RANK 4
    -1.0, 0.5, 0.5, 1.0, 1.0, 0.5, 0.5, -1.0, // RANK 5
    -1.0, 0.0, 0.5, 1.0, 1.0, 0.5, 0.0, -1.0, // RANK 6
    -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, // RANK 7
    -2.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -2.0, // RANK 8
];
const BLACK_BISHOP_PST: [Score; 64] = mirror_ranks(&WHITE_BISHOP_PST);

// - Centralised from the back rank, strong on the seventh
pub const WHITE_ROOK_PST: [Score; 64] = [
    0.0, 0.0, 0.0, 0.5, 0.5, 0.0, 0.0, 0.0, // RANK 1: a1..h1
    -0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5, // RANK 2
    -0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5, // RANK 3
    -0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5, // RANK 4
    -0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5, // RANK 5
    -0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5, // RANK 6
    0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, // RANK 7
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, // RANK 8
];
const BLACK_ROOK_PST: [Score; 64] = mirror_ranks(&WHITE_ROOK_PST);

// - Mild centre bonus
pub const WHITE_QUEEN_PST: [Score; 64] = [
    -2.0, -1.0, -1.0, -0.5, -0.5, -1.0, -1.0, -2.0, // RANK 1: a1..h1
    -1.0, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0, -1.0, // RANK 2
    -1.0, 0.5, 0.5, 0.5, 0.5, 0.5, 0.0, -1.0, // RANK 3
    0.0, 0.0, 0.5, 0.5, 0.5, 0.5, 0.0, -0.5, // RANK 4
    -0.5, 0.0, 0.5, 0.5, 0.5, 0.5, 0.0, -0.5, // RANK 5
    -1.0, 0.0, 0.5, 0.5, 0.5, 0.5, 0.0, -1.0, // RANK 6
    -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, // RANK 7
    -2.0, -1.0, -1.0, -0.5, -0.5, -1.0, -1.0, -2.0, // RANK 8
];
const BLACK_QUEEN_PST: [Score; 64] = mirror_ranks(&WHITE_QUEEN_PST);

// - Keeps the king tucked away behind its pawns
// - Rewards the castled squares
pub const WHITE_KING_PST: [Score; 64] = [
    2.0, 3.0, 1.0, 0.0, 0.0, 1.0, 3.0, 2.0, // RANK 1: a1..h1
    2.0, 2.0, 0.0, 0.0, 0.0, 0.0, 2.0, 2.0, // RANK 2
    -1.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -1.0, // RANK 3
    -2.0, -3.0, -3.0, -4.0, -4.0, -3.0, -3.0, -2.0, // RANK 4
    -3.0, -4.0, -4.0, -5.0, -5.0, -4.0, -4.0, -3.0, // RANK 5
    -3.0, -4.0, -4.0, -5.0, -5.0, -4.0, -4.0, -3.0, // RANK 6
    -3.0, -4.0, -4.0, -5.0, -5.0, -4.0, -4.0, -3.0, // RANK 7
    -3.0, -4.0, -4.0, -5.0, -5.0, -4.0, -4.0, -3.0, // RANK 8
];
const BLACK_KING_PST: [Score; 64] = mirror_ranks(&WHITE_KING_PST);
