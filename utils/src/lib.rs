mod error;
mod game_state;
mod material;
mod position;
mod status;

pub use error::PositionError;
pub use game_state::GameState;
pub use material::has_insufficient_material;
pub use position::Position;
pub use status::{DrawReason, GameStatus};
