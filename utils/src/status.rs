use chess::Color;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    InsufficientMaterial,
    ThreefoldRepetition,
    FiftyMoveRule,
}

/// Where a game stands, as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing { to_move: Color, in_check: bool },
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Ongoing { .. })
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Checkmate { winner } => write!(f, "Checkmate! {} wins.", color_name(*winner)),
            GameStatus::Stalemate | GameStatus::Draw(_) => write!(f, "Draw!"),
            GameStatus::Ongoing { to_move, in_check } => {
                write!(f, "{}'s turn", color_name(*to_move))?;
                if *in_check {
                    write!(f, " (Check!)")?;
                }
                Ok(())
            }
        }
    }
}
