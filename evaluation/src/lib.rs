pub mod def;
pub mod scores;
pub mod static_eval;

pub use def::Evaluator;
pub use scores::Score;
pub use static_eval::{evaluate_board, evaluate_pieces, piece_value, StaticEvaluator};
