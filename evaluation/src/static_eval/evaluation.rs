use chess::{BitBoard, Board, Color, Piece, Square, ALL_PIECES, EMPTY};

use crate::scores::Score;
use crate::static_eval::pst::{get_pst, pst_value, sum_pst};
use crate::static_eval::values::piece_value;

// Return final evaluation (positive = good for White, negative = good for Black)
//
// Terminal positions get no special treatment: a mated side is scored on
// material and placement like any other position.
pub fn evaluate_board(board: &Board) -> Score {
    let white_mask = board.color_combined(Color::White);
    let black_mask = board.color_combined(Color::Black);

    let mut score = 0.0;
    score += evaluate_material(board, Color::White, white_mask);
    score -= evaluate_material(board, Color::Black, black_mask);
    score
}

/// Scores an arbitrary set of pieces, one `(square, piece, color)` per entry.
///
/// Same sum as [`evaluate_board`], but usable on piece lists that do not form
/// a legal board (no kings, several queens, an empty board).
pub fn evaluate_pieces<I>(pieces: I) -> Score
where
    I: IntoIterator<Item = (Square, Piece, Color)>,
{
    pieces
        .into_iter()
        .map(|(square, piece, color)| {
            let value = piece_value(piece) + pst_value(piece, color, square);
            match color {
                Color::White => value,
                Color::Black => -value,
            }
        })
        .sum()
}

#[inline(always)]
fn evaluate_material(board: &Board, color: Color, color_mask: &BitBoard) -> Score {
    let pst = get_pst(color);

    let mut score = 0.0;
    for piece in ALL_PIECES {
        let mask = *board.pieces(piece) & *color_mask;
        if mask == EMPTY {
            continue;
        }
        score += piece_value(piece) * mask.popcnt() as Score;
        score += sum_pst(mask, pst.table(piece));
    }
    score
}
