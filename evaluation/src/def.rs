use chess::Board;

use crate::scores::Score;

/// Static evaluation interface.
///
/// Generic over the position type so a search can score whatever game state it walks.
pub trait Evaluator<P: ?Sized = Board> {
    fn name(&self) -> String;
    /// Evaluate position from White's perspective. Positive = White advantage.
    fn evaluate(&self, position: &P) -> Score;
}
