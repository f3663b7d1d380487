use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

mod search;

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult<M> {
    /// The move judged best for the side to move.
    pub best_move: M,
    /// Score of `best_move` from White's perspective.
    pub score: f32,
    /// Number of positions visited, root children included.
    pub nodes: u64,
}

/// Fixed-depth minimax with alpha-beta pruning.
///
/// The engine owns its evaluator and the random source used to shuffle the
/// root moves. Nothing about a position is kept between searches.
pub struct Engine<E, R = StdRng> {
    /// Static evaluation used at the leaves
    evaluator: E,
    /// Shuffles root moves so equal candidates are picked at random
    rng: R,
    /// Number of nodes visited by the current (or last) search
    nodes: u64,
}

impl<E> Engine<E, StdRng> {
    pub fn new(evaluator: E) -> Self {
        Self::with_rng(evaluator, StdRng::from_entropy())
    }

    /// An engine whose root shuffle is reproducible.
    pub fn seeded(evaluator: E, seed: u64) -> Self {
        Self::with_rng(evaluator, StdRng::seed_from_u64(seed))
    }

    pub fn reseed(&mut self, seed: Option<u64>) {
        self.rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
    }
}

impl<E, R: Rng> Engine<E, R> {
    pub fn with_rng(evaluator: E, rng: R) -> Self {
        Self {
            evaluator,
            rng,
            nodes: 0,
        }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}
