use chess::Color;
use evaluation::scores::{NEG_INFINITY, POS_INFINITY};
use evaluation::{Evaluator, Score};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use utils::GameState;

use crate::Engine;

/// A hand-built game tree. Moves are child indexes; nodes without children end the game.
#[derive(Debug, Clone)]
struct TreeGame {
    nodes: Vec<Node>,
    path: Vec<usize>,
    root_side: Color,
    applies: usize,
    undos: usize,
}

#[derive(Debug, Clone)]
struct Node {
    value: Score,
    children: Vec<usize>,
}

impl TreeGame {
    fn new(root_side: Color) -> Self {
        Self {
            nodes: vec![Node {
                value: 0.0,
                children: Vec::new(),
            }],
            path: vec![0],
            root_side,
            applies: 0,
            undos: 0,
        }
    }

    fn add_child(&mut self, parent: usize, value: Score) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node {
            value,
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// Random tree whose branches may end early.
    fn random(rng: &mut StdRng, depth: usize, root_side: Color) -> Self {
        let mut game = Self::new(root_side);
        let mut frontier = vec![(0, 0)];
        while let Some((node, level)) = frontier.pop() {
            if level == depth {
                continue;
            }
            let branching = if level == 0 { rng.gen_range(2..=4) } else { rng.gen_range(0..=4) };
            for _ in 0..branching {
                let value = rng.gen_range(-20..=20) as Score;
                let child = game.add_child(node, value);
                frontier.push((child, level + 1));
            }
        }
        game
    }

    fn current(&self) -> usize {
        *self.path.last().unwrap()
    }

    fn size(&self) -> usize {
        self.nodes.len()
    }
}

impl GameState for TreeGame {
    type Move = usize;

    fn legal_moves(&self) -> Vec<usize> {
        (0..self.nodes[self.current()].children.len()).collect()
    }

    fn apply(&mut self, mv: usize) {
        let child = self.nodes[self.current()].children[mv];
        self.path.push(child);
        self.applies += 1;
    }

    fn undo(&mut self) {
        assert!(self.path.len() > 1, "undo at the root");
        self.path.pop();
        self.undos += 1;
    }

    fn is_game_over(&self) -> bool {
        self.nodes[self.current()].children.is_empty()
    }

    fn side_to_move(&self) -> Color {
        if (self.path.len() - 1) % 2 == 0 {
            self.root_side
        } else {
            !self.root_side
        }
    }
}

struct NodeValue;

impl Evaluator<TreeGame> for NodeValue {
    fn name(&self) -> String {
        "NodeValue".to_string()
    }

    fn evaluate(&self, game: &TreeGame) -> Score {
        game.nodes[game.current()].value
    }
}

/// Plain minimax without pruning.
fn exhaustive(game: &TreeGame, node: usize, depth: u8, maximizing: bool) -> Score {
    let children = &game.nodes[node].children;
    if depth == 0 || children.is_empty() {
        return game.nodes[node].value;
    }
    let values = children
        .iter()
        .map(|&child| exhaustive(game, child, depth - 1, !maximizing));
    if maximizing {
        values.fold(NEG_INFINITY, Score::max)
    } else {
        values.fold(POS_INFINITY, Score::min)
    }
}

fn root_value_of(game: &TreeGame, mv: usize, depth: u8) -> Score {
    let child = game.nodes[0].children[mv];
    exhaustive(game, child, depth - 1, game.root_side == Color::Black)
}

#[test]
fn test_root_score_matches_exhaustive_minimax() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    for round in 0..200 {
        let side = if round % 2 == 0 { Color::White } else { Color::Black };
        let mut game = TreeGame::random(&mut rng, 5, side);
        let depth = rng.gen_range(1..=5u8);
        let mut engine = Engine::seeded(NodeValue, round);

        let result = engine.search(&mut game, depth).unwrap();
        let expected = exhaustive(&game, 0, depth, side == Color::White);

        assert_eq!(result.score, expected, "round {}", round);
        assert_eq!(root_value_of(&game, result.best_move, depth), expected);
    }
}

#[test]
fn test_search_leaves_game_untouched() {
    let mut rng = StdRng::seed_from_u64(11);

    for round in 0..50 {
        let mut game = TreeGame::random(&mut rng, 4, Color::White);
        let mut engine = Engine::seeded(NodeValue, round);

        engine.select_best_move(&mut game, 4);

        assert_eq!(game.path, vec![0]);
        assert_eq!(game.applies, game.undos);
        assert!(game.applies > 0);
    }
}

#[test]
fn test_minimax_prunes_refuted_branch() {
    // root(max) -> a(min) -> [3, 5]
    //           -> b(min) -> [2, 9]
    // Once b offers 2 it can no longer beat a, so 9 is never visited.
    let mut game = TreeGame::new(Color::White);
    let a = game.add_child(0, 0.0);
    let b = game.add_child(0, 0.0);
    game.add_child(a, 3.0);
    game.add_child(a, 5.0);
    game.add_child(b, 2.0);
    game.add_child(b, 9.0);

    let mut engine = Engine::seeded(NodeValue, 1);
    let value = engine.minimax(&mut game, 2, NEG_INFINITY, POS_INFINITY, true);

    assert_eq!(value, 3.0);
    assert_eq!(engine.nodes(), 6);
    assert!(engine.nodes() < game.size() as u64);
}

#[test]
fn test_depth_cutoff_uses_static_value() {
    // The interior node's own value stands in for its subtree at the horizon.
    let mut game = TreeGame::new(Color::White);
    let trap = game.add_child(0, 8.0);
    game.add_child(trap, -50.0);
    game.add_child(0, 4.0);

    let mut engine = Engine::seeded(NodeValue, 3);
    assert_eq!(engine.select_best_move(&mut game, 1), Some(0));
    assert_eq!(engine.select_best_move(&mut game, 2), Some(1));
}

#[test]
fn test_black_minimizes() {
    let mut game = TreeGame::new(Color::Black);
    game.add_child(0, 6.0);
    game.add_child(0, -2.0);
    game.add_child(0, 1.0);

    let mut engine = Engine::seeded(NodeValue, 5);
    let result = engine.search(&mut game, 1).unwrap();

    assert_eq!(result.best_move, 1);
    assert_eq!(result.score, -2.0);
}

#[test]
fn test_depth_zero_searches_one_ply() {
    let mut game = TreeGame::new(Color::White);
    let deep = game.add_child(0, 1.0);
    game.add_child(deep, 100.0);
    game.add_child(0, 2.0);

    let mut engine = Engine::seeded(NodeValue, 9);
    let result = engine.search(&mut game, 0).unwrap();

    assert_eq!(result.best_move, 1);
    assert_eq!(result.nodes, 2);
}

#[test]
fn test_no_moves_returns_none() {
    let mut game = TreeGame::new(Color::White);
    let mut engine = Engine::seeded(NodeValue, 0);

    assert_eq!(engine.select_best_move(&mut game, 3), None);
    assert_eq!(game.applies, 0);
}

#[test]
fn test_equal_moves_are_picked_at_random() {
    let mut game = TreeGame::new(Color::White);
    for _ in 0..3 {
        game.add_child(0, 1.0);
    }

    let mut seen = [false; 3];
    for seed in 0..64 {
        let mut engine = Engine::seeded(NodeValue, seed);
        let mv = engine.select_best_move(&mut game, 1).unwrap();
        seen[mv] = true;
    }

    assert_eq!(seen, [true; 3]);
}

#[test]
fn test_same_seed_same_choice() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut game = TreeGame::random(&mut rng, 3, Color::White);

    let first = Engine::seeded(NodeValue, 77).search(&mut game, 3);
    let second = Engine::seeded(NodeValue, 77).search(&mut game, 3);

    assert_eq!(first, second);
}

#[test]
fn test_single_move_is_returned() {
    let mut game = TreeGame::new(Color::White);
    game.add_child(0, -30.0);

    let mut engine = Engine::seeded(NodeValue, 0);
    assert_eq!(engine.select_best_move(&mut game, 3), Some(0));
}
