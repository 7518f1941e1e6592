//! Command-line surface of the `parlor` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use parlor_engine::variant::Variant;

#[derive(Parser, Debug)]
#[command(
    name = "parlor",
    version,
    about = "Five Card Draw, Seven Card Stud and Texas Hold'em at the console"
)]
pub struct ParlorCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a hot-seat session; humans answer on stdin
    Play {
        #[arg(long, value_enum)]
        game: GameArg,
        /// Human players, comma separated
        #[arg(long, value_delimiter = ',')]
        players: Vec<String>,
        /// Automated seats to add
        #[arg(long, default_value_t = 0)]
        bots: usize,
        /// Stop after this many rounds (default: until everyone quits)
        #[arg(long)]
        rounds: Option<u64>,
        #[arg(long)]
        seed: Option<u64>,
        /// Append JSONL round records to this file
        #[arg(long)]
        log: Option<PathBuf>,
        /// Where player records are kept (overrides the configuration)
        #[arg(long)]
        records_dir: Option<PathBuf>,
    },
    /// Run a bots-only session and summarize it
    Sim {
        #[arg(long, value_enum)]
        game: GameArg,
        #[arg(long, default_value_t = 4)]
        bots: usize,
        #[arg(long, default_value_t = 10)]
        rounds: u64,
        #[arg(long)]
        seed: Option<u64>,
        /// AI kind for every seat (baseline, random)
        #[arg(long)]
        ai: Option<String>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Rank five cards, or pick the best five of seven
    Rank {
        /// Card tokens such as "Ah Kd 10c 10s 2h"
        #[arg(long)]
        cards: String,
    },
    /// Load a deck file and report its size and duplicates
    Deck {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        shuffle: bool,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the resolved configuration
    Cfg,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum GameArg {
    Draw,
    Stud,
    Holdem,
}

impl From<GameArg> for Variant {
    fn from(g: GameArg) -> Self {
        match g {
            GameArg::Draw => Variant::FiveCardDraw,
            GameArg::Stud => Variant::SevenCardStud,
            GameArg::Holdem => Variant::TexasHoldEm,
        }
    }
}
