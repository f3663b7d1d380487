use super::commands::UciOutput;
use super::NULL_MOVE;

pub struct Encoder;

impl Encoder {
    pub fn encode(&self, response: &UciOutput) -> String {
        match response {
            UciOutput::IdName(name) => format!("id name {}", name),
            UciOutput::IdAuthor(author) => format!("id author {}", author),

            UciOutput::UciOk => "uciok".to_string(),
            UciOutput::ReadyOk => "readyok".to_string(),

            UciOutput::BestMove(Some(mv)) => format!("bestmove {}", mv),
            UciOutput::BestMove(None) => format!("bestmove {}", NULL_MOVE),
            UciOutput::Info(info) => {
                let mut line = format!(
                    "info depth {} score cp {} nodes {} nps {} time {}",
                    info.depth, info.score, info.nodes, info.nodes_per_second, info.time
                );
                if !info.pv.is_empty() {
                    let pv: Vec<String> = info.pv.iter().map(|mv| mv.to_string()).collect();
                    line.push_str(" pv ");
                    line.push_str(&pv.join(" "));
                }
                line
            }
            UciOutput::Option(declaration) => declaration.clone(),
        }
    }
}
