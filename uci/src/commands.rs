use chess::ChessMove;
use utils::Position;

#[derive(Debug)]
pub enum UciInput {
    Uci,
    IsReady,

    UciNewGame,
    /// The position with every listed move already played, so its history
    /// carries the repetitions of the game so far.
    Position(Position),
    Go(GoParams),

    Stop,
    Quit,
    SetOption {
        name: String,
        value: String,
    },
    /// A known command whose arguments could not be parsed.
    Malformed {
        reason: String,
    },
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum UciOutput {
    IdName(String),
    IdAuthor(String),
    UciOk,
    ReadyOk,
    /// `None` is reported as the null move.
    BestMove(Option<ChessMove>),
    Info(Info),
    Option(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Info {
    pub depth: u8,
    pub nodes: u64,
    pub nodes_per_second: u64,
    /// Milliseconds spent searching
    pub time: u64,
    pub pv: Vec<ChessMove>,
    /// Centipawns from White's point of view
    pub score: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    // Search depth in plies; the configured depth applies when absent.
    pub depth: Option<u8>,
}
