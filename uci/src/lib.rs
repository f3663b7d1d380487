mod connection;
mod decoder;
mod encoder;
mod options;

pub mod commands;

pub use commands::{GoParams, Info, UciInput, UciOutput};
pub use connection::UciConnection;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use options::{UciOption, UciOptionType};

/// Sent as the best move when the side to move has no legal move.
pub const NULL_MOVE: &str = "0000";
