pub mod evaluation;
mod pst;
pub mod values;

pub use evaluation::{evaluate_board, evaluate_pieces};
pub use values::piece_value;

use crate::def::Evaluator;
use crate::scores::Score;
use chess::Board;
use utils::Position;

/// Material plus piece-square tables, nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticEvaluator;

impl Evaluator<Board> for StaticEvaluator {
    fn name(&self) -> String {
        "Material+PST".to_string()
    }

    fn evaluate(&self, board: &Board) -> Score {
        evaluate_board(board)
    }
}

impl Evaluator<Position> for StaticEvaluator {
    fn name(&self) -> String {
        "Material+PST".to_string()
    }

    fn evaluate(&self, position: &Position) -> Score {
        evaluate_board(position.board())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_and_board_agree() {
        let position =
            Position::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4")
                .unwrap();

        let from_position = Evaluator::<Position>::evaluate(&StaticEvaluator, &position);
        let from_board = Evaluator::<Board>::evaluate(&StaticEvaluator, position.board());

        assert_eq!(from_position, from_board);
        assert_eq!(Evaluator::<Position>::name(&StaticEvaluator), "Material+PST");
    }
}
