use std::sync::mpsc::Sender;
use std::time::Instant;

use chess::ChessMove;
use evaluation::scores::to_centipawns;
use evaluation::{Evaluator, StaticEvaluator};
use log::debug;
use search::{Engine, EngineConfig, MAX_DEPTH, MIN_DEPTH};
use uci::commands::{GoParams, Info};
use uci::UciOutput;
use utils::Position;

/// The playing engine: the current game plus the search that answers `go`.
pub struct Player {
    position: Position,
    config: EngineConfig,
    engine: Engine<StaticEvaluator>,
}

impl Player {
    pub fn new(config: &EngineConfig) -> Self {
        let mut engine = Engine::new(StaticEvaluator);
        engine.reseed(config.seed());

        Self {
            position: Position::default(),
            config: config.clone(),
            engine,
        }
    }

    pub fn configure(&mut self, config: &EngineConfig) {
        if config.seed.value != self.config.seed.value {
            self.engine.reseed(config.seed());
        }
        self.config = config.clone();
    }

    pub fn new_game(&mut self) {
        self.position = Position::default();
        // A fixed seed replays the same game from the start.
        self.engine.reseed(self.config.seed());
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Searches the current position and returns the chosen move, if any.
    ///
    /// The search walks a copy, so the game position is never touched.
    pub fn go(&mut self, params: &GoParams, output: Option<&Sender<UciOutput>>) -> Option<ChessMove> {
        let requested = params.depth.unwrap_or(self.config.depth.value);
        let depth = requested.clamp(MIN_DEPTH, MAX_DEPTH);
        if depth != requested {
            debug!("Depth {} out of range, searching depth {}", requested, depth);
        }
        let mut root = self.position.clone();

        let start = Instant::now();
        let result = self.engine.search(&mut root, depth);
        let elapsed = start.elapsed();

        let Some(result) = result else {
            debug!("No legal move: {}", self.position.status());
            return None;
        };

        let time = elapsed.as_millis() as u64;
        let nodes_per_second = (result.nodes as f64 / elapsed.as_secs_f64().max(1e-6)) as u64;
        let score = to_centipawns(result.score);

        debug!(
            "{} depth {} chose {} (score {} cp, {} nodes, {} ms)",
            Evaluator::<Position>::name(self.engine.evaluator()),
            depth,
            result.best_move,
            score,
            result.nodes,
            time
        );

        if let Some(output) = output {
            let info = Info {
                depth,
                nodes: result.nodes,
                nodes_per_second,
                time,
                pv: vec![result.best_move],
                score,
            };
            if output.send(UciOutput::Info(info)).is_err() {
                debug!("Output closed before search info was sent");
            }
        }

        Some(result.best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;
    use utils::GameState;

    fn seeded_config(depth: u8) -> EngineConfig {
        let mut config = EngineConfig::default();
        config.update_from_uci("Depth", &depth.to_string()).unwrap();
        config.update_from_uci("Seed", "17").unwrap();
        config
    }

    #[test]
    fn test_go_leaves_position_untouched() {
        let mut player = Player::new(&seeded_config(2));
        let position = Position::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").unwrap();
        player.set_position(position.clone());

        let mv = player.go(&GoParams::default(), None).unwrap();

        assert_eq!(mv.to_string(), "e4d5");
        assert_eq!(player.position(), &position);
    }

    #[test]
    fn test_go_reports_info() {
        let mut player = Player::new(&seeded_config(3));
        let (tx, rx) = channel();

        let mv = player.go(&GoParams { depth: Some(1) }, Some(&tx)).unwrap();

        let UciOutput::Info(info) = rx.try_recv().unwrap() else {
            panic!("Expected info")
        };
        assert_eq!(info.depth, 1);
        assert_eq!(info.pv, vec![mv]);
        assert_eq!(info.nodes, 20);
    }

    #[test]
    fn test_go_clamps_requested_depth() {
        let mut player = Player::new(&seeded_config(3));
        // Every reply leaves bare kings, so even the deepest search ends at once.
        player.set_position(Position::from_fen("7k/8/8/8/8/8/8/K7 w - - 0 1").unwrap());
        let (tx, rx) = channel();

        player.go(&GoParams { depth: Some(200) }, Some(&tx)).unwrap();
        let UciOutput::Info(info) = rx.try_recv().unwrap() else {
            panic!("Expected info")
        };
        assert_eq!(info.depth, MAX_DEPTH);

        player.go(&GoParams { depth: Some(0) }, Some(&tx)).unwrap();
        let UciOutput::Info(info) = rx.try_recv().unwrap() else {
            panic!("Expected info")
        };
        assert_eq!(info.depth, MIN_DEPTH);
    }

    #[test]
    fn test_go_without_moves() {
        let mut player = Player::new(&seeded_config(3));
        player.set_position(Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap());

        let (tx, rx) = channel();
        assert_eq!(player.go(&GoParams::default(), Some(&tx)), None);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_fixed_seed_replays_after_new_game() {
        let mut player = Player::new(&seeded_config(1));
        let first = player.go(&GoParams::default(), None);

        player.new_game();
        let second = player.go(&GoParams::default(), None);

        assert_eq!(first, second);
        assert_eq!(player.position().ply(), 0);
        assert!(player.position().legal_moves().contains(&first.unwrap()));
    }
}
