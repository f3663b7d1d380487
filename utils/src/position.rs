use chess::{Board, BoardStatus, ChessMove, Color, File, MoveGen, Piece, Rank, Square, EMPTY};
use std::str::FromStr;

use crate::error::PositionError;
use crate::game_state::GameState;
use crate::material::has_insufficient_material;
use crate::status::{DrawReason, GameStatus};

/// Plies without a capture or pawn move before the game is drawn.
const FIFTY_MOVE_PLIES: u16 = 100;
const REPETITION_LIMIT: usize = 3;

/// Everything needed to take a move back.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Frame {
    board: Board,
    halfmove_clock: u16,
    fullmove_number: u16,
    mv: ChessMove,
}

/// A game in progress: the current board plus the stack of moves that led to it.
///
/// Moves are played and taken back in place, so a search can walk the tree
/// without copying boards at every ply.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    board: Board,
    halfmove_clock: u16,
    fullmove_number: u16,
    stack: Vec<Frame>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new(Board::default())
    }
}

impl Position {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            halfmove_clock: 0,
            fullmove_number: 1,
            stack: Vec::new(),
        }
    }

    /// Parses a FEN string. The clock fields are optional and default to `0 1`.
    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        let board =
            Board::from_str(fen).map_err(|_| PositionError::InvalidFen(fen.to_string()))?;

        let mut clocks = fen.split_whitespace().skip(4);
        let halfmove_clock = parse_clock(clocks.next(), 0, fen)?;
        let fullmove_number = parse_clock(clocks.next(), 1, fen)?;

        Ok(Self {
            board,
            halfmove_clock,
            fullmove_number,
            stack: Vec::new(),
        })
    }

    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The piece standing on `rank`/`file` (both 0..8, rank 0 = first rank).
    /// Coordinates off the board hold nothing.
    pub fn piece_at(&self, rank: usize, file: usize) -> Option<(Piece, Color)> {
        if rank >= 8 || file >= 8 {
            return None;
        }
        let square = Square::make_square(Rank::from_index(rank), File::from_index(file));
        self.board.piece_on(square).zip(self.board.color_on(square))
    }

    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Number of moves applied since this position was set up.
    pub fn ply(&self) -> usize {
        self.stack.len()
    }

    /// Moves applied so far, oldest first.
    pub fn history(&self) -> Vec<ChessMove> {
        self.stack.iter().map(|frame| frame.mv).collect()
    }

    pub fn fen(&self) -> String {
        let board = self.board.to_string();
        let fields: Vec<&str> = board.split_whitespace().take(3).collect();
        format!(
            "{} {} {} {}",
            fields.join(" "),
            self.en_passant_target(),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    // The board tracks the pawn that just double-pushed; FEN names the square it skipped.
    fn en_passant_target(&self) -> String {
        let target = self.board.en_passant().and_then(|pawn| match self.board.side_to_move() {
            Color::White => pawn.up(),
            Color::Black => pawn.down(),
        });
        match target {
            Some(square) => square.to_string(),
            None => "-".to_string(),
        }
    }

    pub fn in_check(&self) -> bool {
        *self.board.checkers() != EMPTY
    }

    pub fn status(&self) -> GameStatus {
        match self.board.status() {
            BoardStatus::Checkmate => GameStatus::Checkmate {
                winner: !self.board.side_to_move(),
            },
            BoardStatus::Stalemate => GameStatus::Stalemate,
            BoardStatus::Ongoing => match self.draw_reason() {
                Some(reason) => GameStatus::Draw(reason),
                None => GameStatus::Ongoing {
                    to_move: self.board.side_to_move(),
                    in_check: self.in_check(),
                },
            },
        }
    }

    fn draw_reason(&self) -> Option<DrawReason> {
        if has_insufficient_material(&self.board) {
            Some(DrawReason::InsufficientMaterial)
        } else if self.halfmove_clock >= FIFTY_MOVE_PLIES {
            Some(DrawReason::FiftyMoveRule)
        } else if self.is_threefold_repetition() {
            Some(DrawReason::ThreefoldRepetition)
        } else {
            None
        }
    }

    // Only positions since the last capture or pawn move can repeat.
    fn is_threefold_repetition(&self) -> bool {
        let hash = self.board.get_hash();
        let window = (self.halfmove_clock as usize).min(self.stack.len());
        let earlier = self
            .stack
            .iter()
            .rev()
            .take(window)
            .filter(|frame| frame.board.get_hash() == hash)
            .count();
        earlier + 1 >= REPETITION_LIMIT
    }

    /// True if moving from `source` to `dest` is legal only with a promotion piece.
    pub fn requires_promotion(&self, source: Square, dest: Square) -> bool {
        MoveGen::new_legal(&self.board).any(|mv| {
            mv.get_source() == source && mv.get_dest() == dest && mv.get_promotion().is_some()
        })
    }

    /// Reads a move in UCI coordinate notation (`e2e4`, `e7e8q`) and checks it is legal here.
    pub fn parse_move(&self, text: &str) -> Result<ChessMove, PositionError> {
        let mv = parse_coordinates(text).ok_or_else(|| PositionError::InvalidMove(text.to_string()))?;

        if mv.get_promotion().is_none() && self.requires_promotion(mv.get_source(), mv.get_dest())
        {
            return Err(PositionError::PromotionRequired(text.to_string()));
        }
        if !self.board.legal(mv) {
            return Err(PositionError::IllegalMove(text.to_string()));
        }

        Ok(mv)
    }

    /// Parses and plays a move given in UCI coordinate notation.
    pub fn play(&mut self, text: &str) -> Result<ChessMove, PositionError> {
        let mv = self.parse_move(text)?;
        self.apply(mv);
        Ok(mv)
    }
}

impl GameState for Position {
    type Move = ChessMove;

    fn legal_moves(&self) -> Vec<ChessMove> {
        MoveGen::new_legal(&self.board).collect()
    }

    fn apply(&mut self, mv: ChessMove) {
        debug_assert!(
            self.board.legal(mv),
            "illegal move {} applied to {}",
            mv,
            self.fen()
        );

        let irreversible = self.board.piece_on(mv.get_source()) == Some(Piece::Pawn)
            || self.board.piece_on(mv.get_dest()).is_some();

        self.stack.push(Frame {
            board: self.board,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            mv,
        });

        if self.board.side_to_move() == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.halfmove_clock = if irreversible {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        self.board = self.board.make_move_new(mv);
    }

    fn undo(&mut self) {
        let Some(frame) = self.stack.pop() else {
            panic!("undo called on {} with no move to take back", self.fen());
        };

        self.board = frame.board;
        self.halfmove_clock = frame.halfmove_clock;
        self.fullmove_number = frame.fullmove_number;
    }

    fn is_game_over(&self) -> bool {
        self.board.status() != BoardStatus::Ongoing || self.draw_reason().is_some()
    }

    #[inline(always)]
    fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }
}

fn parse_clock(field: Option<&str>, default: u16, fen: &str) -> Result<u16, PositionError> {
    match field {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| PositionError::InvalidFen(fen.to_string())),
    }
}

fn parse_coordinates(text: &str) -> Option<ChessMove> {
    let bytes = text.as_bytes();
    if bytes.len() != 4 && bytes.len() != 5 {
        return None;
    }

    let source = parse_square(bytes[0], bytes[1])?;
    let dest = parse_square(bytes[2], bytes[3])?;
    let promotion = match bytes.get(4) {
        None => None,
        Some(b'q') => Some(Piece::Queen),
        Some(b'r') => Some(Piece::Rook),
        Some(b'b') => Some(Piece::Bishop),
        Some(b'n') => Some(Piece::Knight),
        Some(_) => return None,
    };

    Some(ChessMove::new(source, dest, promotion))
}

fn parse_square(file: u8, rank: u8) -> Option<Square> {
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    Some(Square::make_square(
        Rank::from_index((rank - b'1') as usize),
        File::from_index((file - b'a') as usize),
    ))
}
