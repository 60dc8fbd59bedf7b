//! Command-line and environment configuration.

use crate::theme::Theme;
use clap::Parser;
use rps_core::{Difficulty, Move};
use std::time::Duration;

/// Rock, Paper, Scissors against a computer that can be talked into losing
#[derive(Debug, Clone, Parser)]
#[command(name = "rps", version, about)]
pub struct Config {
    /// Player name; pre-fills the setup form
    #[arg(long, env = "RPS_NAME")]
    pub name: Option<String>,

    /// Number of rounds to play; pre-fills the setup form
    #[arg(long, env = "RPS_ROUNDS")]
    pub rounds: Option<String>,

    /// very-easy, easy, normal, hard or very-hard
    #[arg(long, env = "RPS_DIFFICULTY", default_value = "normal")]
    pub difficulty: Difficulty,

    /// bright, easter or metal
    #[arg(long, env = "RPS_THEME", default_value = "bright")]
    pub theme: Theme,

    /// Seed for reproducible computer moves
    #[arg(long, env = "RPS_SEED")]
    pub seed: Option<u64>,

    /// Length of the round animation in milliseconds; 0 turns it off
    #[arg(long, env = "RPS_ANIMATION_MS", default_value_t = 2000)]
    pub animation_ms: u64,

    /// Play these moves without prompting, e.g. `r,p,s,rock`
    #[arg(long, value_delimiter = ',')]
    pub moves: Vec<Move>,

    /// Print round reports and stats as JSON lines; needs `--moves`
    #[arg(long, requires = "moves")]
    pub json: bool,
}

impl Config {
    pub fn animation(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    pub fn is_scripted(&self) -> bool {
        !self.moves.is_empty()
    }
}
