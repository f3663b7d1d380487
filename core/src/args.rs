use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "Gambit")]
#[command(author = "Gambit Developers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Log UCI communication to a file for debugging.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    /// Search depth in plies (1-8). Overrides the default of 3.
    #[arg(short, long)]
    pub depth: Option<u8>,

    /// Seed for the move shuffle. 0 or absent picks a random seed.
    #[arg(short, long)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the best move for a position and exit.
    Bestmove {
        /// Position to search, in FEN.
        #[arg(long)]
        fen: String,

        #[arg(long)]
        depth: Option<u8>,

        #[arg(long)]
        seed: Option<u64>,
    },
}
