//! Game definitions and logic.

mod difficulty;
mod resolver;
mod rps;

pub use difficulty::{Difficulty, ParseDifficultyError};
pub use resolver::{resolve_round, DrawSource, RandomDraws, RoundResolution, ScriptedDraws};
pub use rps::{Move, Outcome, ParseMoveError};
