use std::ops::{Deref, DerefMut};

use utils::GameState;

/// A move played for the lifetime of the guard.
///
/// Creating the guard applies the move; dropping it takes the move back. Every
/// way out of a scope (normal return, a pruning `break`, unwinding) therefore
/// undoes exactly once, keeping apply/undo calls balanced.
pub struct MoveGuard<'a, G: GameState> {
    position: &'a mut G,
}

impl<'a, G: GameState> MoveGuard<'a, G> {
    #[inline(always)]
    pub fn new(position: &'a mut G, mv: G::Move) -> Self {
        position.apply(mv);
        Self { position }
    }
}

impl<G: GameState> Deref for MoveGuard<'_, G> {
    type Target = G;

    #[inline(always)]
    fn deref(&self) -> &G {
        self.position
    }
}

impl<G: GameState> DerefMut for MoveGuard<'_, G> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut G {
        self.position
    }
}

impl<G: GameState> Drop for MoveGuard<'_, G> {
    #[inline(always)]
    fn drop(&mut self) {
        self.position.undo();
    }
}
