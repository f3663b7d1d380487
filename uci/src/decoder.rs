use utils::Position;

use super::commands::{GoParams, UciInput};

pub struct Decoder;

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, input: &str) -> UciInput {
        let input = input.trim();
        let command = input.split_whitespace().next().unwrap_or_default();

        match command {
            "uci" => UciInput::Uci,
            "isready" => UciInput::IsReady,
            "ucinewgame" => UciInput::UciNewGame,
            "position" => self.decode_position(input),
            "go" => self.decode_go(input),
            "setoption" => self.decode_setoption(input),
            "stop" => UciInput::Stop,
            "quit" => UciInput::Quit,

            _ => UciInput::Unknown(input.to_string()),
        }
    }

    fn decode_position(&self, input: &str) -> UciInput {
        match parse_position(input) {
            Ok(position) => UciInput::Position(position),
            Err(reason) => UciInput::Malformed { reason },
        }
    }

    fn decode_setoption(&self, input: &str) -> UciInput {
        // setoption name <name> [value <value>]
        let Some(rest) = input.strip_prefix("setoption name ") else {
            return UciInput::Malformed {
                reason: format!("expected 'setoption name <name> value <value>': {}", input),
            };
        };

        let (name, value) = match rest.split_once(" value ") {
            Some((name, value)) => (name.trim(), value.trim()),
            None => (rest.trim(), ""),
        };

        UciInput::SetOption {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    fn decode_go(&self, input: &str) -> UciInput {
        let depth = match extract_param(input, "depth") {
            None => None,
            Some(raw) => match raw.parse::<u8>() {
                Ok(depth) => Some(depth),
                Err(_) => {
                    return UciInput::Malformed {
                        reason: format!("invalid depth '{}'", raw),
                    }
                }
            },
        };

        UciInput::Go(GoParams { depth })
    }
}

/// Builds the position named by a `position` command, playing any listed moves.
fn parse_position(input: &str) -> Result<Position, String> {
    let body = input.trim_start_matches("position").trim();
    let (setup, moves) = match body.split_once("moves") {
        Some((setup, moves)) => (setup.trim(), Some(moves)),
        None => (body, None),
    };

    let mut position = if setup == "startpos" {
        Position::default()
    } else if let Some(fen) = setup.strip_prefix("fen") {
        Position::from_fen(fen.trim()).map_err(|e| e.to_string())?
    } else {
        return Err(format!("expected 'startpos' or 'fen <fen>', got '{}'", setup));
    };

    for text in moves.into_iter().flat_map(str::split_whitespace) {
        position.play(text).map_err(|e| e.to_string())?;
    }

    Ok(position)
}

fn extract_param<'a>(input: &'a str, param: &str) -> Option<&'a str> {
    input
        .split_whitespace()
        .collect::<Vec<&str>>()
        .windows(2)
        .find(|w| w[0] == param)
        .map(|w| w[1])
}
