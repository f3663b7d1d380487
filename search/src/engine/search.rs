use chess::Color;
use evaluation::scores::{NEG_INFINITY, POS_INFINITY};
use evaluation::{Evaluator, Score};
use rand::seq::SliceRandom;
use rand::Rng;
use utils::GameState;

use crate::guard::MoveGuard;
use crate::MIN_DEPTH;

use super::{Engine, SearchResult};

impl<E, R: Rng> Engine<E, R> {
    /// Picks the best move for the side to move, looking `depth` plies ahead.
    ///
    /// Returns `None` only when there is no legal move. `position` is borrowed
    /// mutably for the walk and handed back exactly as it came in.
    pub fn select_best_move<G>(&mut self, position: &mut G, depth: u8) -> Option<G::Move>
    where
        G: GameState,
        E: Evaluator<G>,
    {
        self.search(position, depth).map(|result| result.best_move)
    }

    /// Same search as [`Engine::select_best_move`], also reporting the score and node count.
    ///
    /// A depth of 0 is searched as depth 1.
    pub fn search<G>(&mut self, position: &mut G, depth: u8) -> Option<SearchResult<G::Move>>
    where
        G: GameState,
        E: Evaluator<G>,
    {
        self.nodes = 0;
        let depth = depth.max(MIN_DEPTH);

        let mut moves = position.legal_moves();
        if moves.is_empty() {
            return None;
        }

        // Equal moves would otherwise always resolve to the generator's first pick.
        moves.shuffle(&mut self.rng);

        let maximizing = position.side_to_move() == Color::White;
        let mut best: Option<(G::Move, Score)> = None;

        for mv in moves {
            let score = {
                let mut child = MoveGuard::new(position, mv);
                let white_to_move = child.side_to_move() == Color::White;
                self.minimax(&mut *child, depth - 1, NEG_INFINITY, POS_INFINITY, white_to_move)
            };

            // Ties keep the earlier move in shuffled order.
            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((mv, score));
            }
        }

        best.map(|(best_move, score)| SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        })
    }

    /// Minimax value of `position` searched `depth` plies deep inside the
    /// `(alpha, beta)` window.
    ///
    /// Leaves (depth 0 or game over) are scored by the static evaluator, so a
    /// mate at the horizon counts only for the material it leaves on the board.
    pub fn minimax<G>(
        &mut self,
        position: &mut G,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Score
    where
        G: GameState,
        E: Evaluator<G>,
    {
        self.nodes += 1;

        if depth == 0 || position.is_game_over() {
            return self.evaluator.evaluate(position);
        }

        let moves = position.legal_moves();

        if maximizing {
            let mut best_value = NEG_INFINITY;
            for mv in moves {
                let value = {
                    let mut child = MoveGuard::new(position, mv);
                    self.minimax(&mut *child, depth - 1, alpha, beta, false)
                };
                best_value = best_value.max(value);
                alpha = alpha.max(best_value);

                if beta <= alpha {
                    break;
                }
            }
            best_value
        } else {
            let mut best_value = POS_INFINITY;
            for mv in moves {
                let value = {
                    let mut child = MoveGuard::new(position, mv);
                    self.minimax(&mut *child, depth - 1, alpha, beta, true)
                };
                best_value = best_value.min(value);
                beta = beta.min(best_value);

                if beta <= alpha {
                    break;
                }
            }
            best_value
        }
    }
}
