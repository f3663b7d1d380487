use chess::{BitBoard, Board, Piece, EMPTY};

const LIGHT_SQUARES: BitBoard = BitBoard(0x55AA_55AA_55AA_55AA);

/// Checks if neither side can ever deliver mate.
///
/// Returns true for:
/// - K vs K
/// - K+N vs K (either side)
/// - K+B vs K (either side)
/// - kings plus any number of bishops, all on squares of one colour
pub fn has_insufficient_material(board: &Board) -> bool {
    let heavy = *board.pieces(Piece::Pawn) | *board.pieces(Piece::Rook) | *board.pieces(Piece::Queen);
    if heavy != EMPTY {
        return false;
    }

    let knights = *board.pieces(Piece::Knight);
    let bishops = *board.pieces(Piece::Bishop);

    if (knights | bishops).popcnt() <= 1 {
        return true;
    }
    if knights != EMPTY {
        return false;
    }

    let on_light = bishops & LIGHT_SQUARES;
    on_light == EMPTY || on_light == bishops
}
