// The rules oracle the search walks.
//
// The search borrows a game state for the duration of a call and mutates it in
// place: every `apply` is paired with exactly one `undo`, nested like a stack,
// so the state handed in is the state handed back.

use chess::Color;
use std::fmt::Debug;

pub trait GameState {
    type Move: Copy + PartialEq + Debug;

    /// All legal moves for the side to move. Empty when there are none.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Plays `mv`, which must come from `legal_moves`.
    fn apply(&mut self, mv: Self::Move);

    /// Takes back the most recent `apply`.
    fn undo(&mut self);

    /// Checkmate, stalemate, or any draw the rules recognise.
    fn is_game_over(&self) -> bool;

    fn side_to_move(&self) -> Color;
}
