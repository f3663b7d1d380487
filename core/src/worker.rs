use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::{self, JoinHandle};

use log::debug;
use search::EngineConfig;
use uci::commands::GoParams;
use uci::UciOutput;
use utils::Position;

use crate::engine::Player;

/// Commands sent from the UCI thread to the engine worker.
pub enum EngineCommand {
    /// Update engine configuration.
    Configure(Box<EngineConfig>),
    /// Reset to the starting position for a new game.
    NewGame,
    /// Set the position to search from.
    SetPosition(Box<Position>),
    /// Search the current position and answer with a best move.
    Go(GoParams),
    /// Shut down the worker thread.
    Quit,
}

/// Engine worker that processes commands on a dedicated thread.
///
/// Commands are handled in arrival order, so a `go` always searches the
/// position set before it. A running search is never interrupted.
pub struct EngineWorker {
    player: Player,
    rx: Receiver<EngineCommand>,
    output: Sender<UciOutput>,
}

impl EngineWorker {
    pub fn new(player: Player, rx: Receiver<EngineCommand>, output: Sender<UciOutput>) -> Self {
        Self { player, rx, output }
    }

    /// Starts a worker thread and returns the handle used to drive it.
    pub fn spawn(player: Player, output: Sender<UciOutput>) -> (Sender<EngineCommand>, JoinHandle<()>) {
        let (tx, rx) = channel();
        let worker = Self::new(player, rx, output);
        (tx, thread::spawn(move || worker.run()))
    }

    /// Main loop: process commands until Quit is received or the sender is gone.
    pub fn run(mut self) {
        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::Go(params) => {
                    // Every go gets a bestmove, the null move when there is nothing to play.
                    let best_move = self.player.go(&params, Some(&self.output));
                    if self.output.send(UciOutput::BestMove(best_move)).is_err() {
                        debug!("Output closed, stopping worker");
                        break;
                    }
                }
                EngineCommand::SetPosition(position) => {
                    self.player.set_position(*position);
                }
                EngineCommand::NewGame => {
                    self.player.new_game();
                }
                EngineCommand::Configure(config) => {
                    self.player.configure(&config);
                }
                EngineCommand::Quit => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_after_position_answers_bestmove() {
        let (output_tx, output_rx) = channel();
        let (commands, handle) = EngineWorker::spawn(Player::new(&EngineConfig::default()), output_tx);

        let position = Position::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").unwrap();
        commands.send(EngineCommand::SetPosition(Box::new(position))).unwrap();
        commands.send(EngineCommand::Go(GoParams { depth: Some(1) })).unwrap();
        commands.send(EngineCommand::Quit).unwrap();
        handle.join().unwrap();

        let outputs: Vec<UciOutput> = output_rx.iter().collect();
        assert_eq!(outputs.len(), 2);
        assert!(matches!(outputs[0], UciOutput::Info(_)));
        let UciOutput::BestMove(Some(mv)) = &outputs[1] else {
            panic!("Expected bestmove")
        };
        assert_eq!(mv.to_string(), "e4d5");
    }

    #[test]
    fn test_go_without_moves_answers_null_move() {
        let (output_tx, output_rx) = channel();
        let (commands, handle) = EngineWorker::spawn(Player::new(&EngineConfig::default()), output_tx);

        let position = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        commands.send(EngineCommand::SetPosition(Box::new(position))).unwrap();
        commands.send(EngineCommand::Go(GoParams::default())).unwrap();
        drop(commands);
        handle.join().unwrap();

        let outputs: Vec<UciOutput> = output_rx.iter().collect();
        assert_eq!(outputs, vec![UciOutput::BestMove(None)]);
    }
}
