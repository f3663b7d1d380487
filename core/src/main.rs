mod args;
mod engine;
mod worker;

use args::{Args, Command};
use clap::Parser;
use engine::Player;
use log::{debug, LevelFilter};
use search::EngineConfig;
use simplelog::{Config, WriteLogger};
use std::error::Error;
use std::fs::File;
use uci::commands::GoParams;
use uci::{UciConnection, UciInput, UciOutput};
use utils::Position;
use worker::{EngineCommand, EngineWorker};

const ENGINE_NAME: &str = "Gambit";
const ENGINE_AUTHOR: &str = "Gambit Developers";

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let mut config = EngineConfig::default();
    apply_overrides(&mut config, args.depth, args.seed)?;

    match args.command {
        Some(Command::Bestmove { fen, depth, seed }) => {
            apply_overrides(&mut config, depth, seed)?;
            bestmove(&fen, &config)
        }
        None => run_uci(config),
    }
}

fn run_uci(mut config: EngineConfig) -> Result<(), Box<dyn Error>> {
    let mut uci = UciConnection::new();
    let (engine, worker) = EngineWorker::spawn(Player::new(&config), uci.sender());

    uci.listen(|input, output| {
        match input {
            UciInput::Uci => {
                output.send(UciOutput::IdName(ENGINE_NAME.to_string()))?;
                output.send(UciOutput::IdAuthor(ENGINE_AUTHOR.to_string()))?;
                config.to_uci(&output)?;
                output.send(UciOutput::UciOk)?;
            }
            UciInput::IsReady => {
                output.send(UciOutput::ReadyOk)?;
            }
            UciInput::SetOption { name, value } => {
                if let Err(e) = config.update_from_uci(name, value) {
                    debug!("Option setting failed: {}", e);
                } else {
                    debug!("Set option '{}' to '{}'", name, value);
                    engine.send(EngineCommand::Configure(Box::new(config.clone())))?;
                }
            }
            UciInput::UciNewGame => {
                engine.send(EngineCommand::NewGame)?;
            }
            UciInput::Position(position) => {
                engine.send(EngineCommand::SetPosition(Box::new(position.clone())))?;
            }
            UciInput::Go(params) => {
                engine.send(EngineCommand::Go(params.clone()))?;
            }
            UciInput::Stop => {
                debug!("Stop received; the running search finishes on its own");
            }
            UciInput::Quit => {
                engine.send(EngineCommand::Quit)?;
            }
            UciInput::Malformed { reason } => {
                debug!("Malformed command: {}", reason);
            }
            UciInput::Unknown(line) => {
                debug!("Unknown command: {}", line);
            }
        }
        Ok(())
    })?;

    // End of input without quit still lets a pending search answer.
    drop(engine);
    if worker.join().is_err() {
        debug!("Engine worker panicked");
    }
    uci.close();

    Ok(())
}

/// One-shot mode: print the move the engine would play and exit.
fn bestmove(fen: &str, config: &EngineConfig) -> Result<(), Box<dyn Error>> {
    let mut player = Player::new(config);
    player.set_position(Position::from_fen(fen)?);

    match player.go(&GoParams::default(), None) {
        Some(mv) => println!("{}", mv),
        None => println!("{}", player.position().status()),
    }

    Ok(())
}

fn apply_overrides(
    config: &mut EngineConfig,
    depth: Option<u8>,
    seed: Option<u64>,
) -> Result<(), Box<dyn Error>> {
    if let Some(depth) = depth {
        config.update_from_uci("Depth", &depth.to_string())?;
    }
    if let Some(seed) = seed {
        config.update_from_uci("Seed", &seed.to_string())?;
    }
    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        WriteLogger::init(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        )?;
    }

    Ok(args)
}
