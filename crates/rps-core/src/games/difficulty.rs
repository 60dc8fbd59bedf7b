//! Difficulty levels and their skew probabilities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty level chosen on the main menu
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    VeryEasy,
    Easy,
    #[default]
    Normal,
    Hard,
    VeryHard,
}

/// Skew probability per level, indexed in `Difficulty::ALL` order.
///
/// The scale is non-linear; 0.5 means an unbiased computer.
const SKEW: [f64; 5] = [0.8, 0.6, 0.5, 0.4, 0.2];

/// Menu label per level, indexed in `Difficulty::ALL` order.
const LABELS: [&str; 5] = [
    "Can I win, please?",
    "Easy",
    "Normal",
    "Hard",
    "You are not ready",
];

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::VeryEasy,
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::VeryHard,
    ];

    /// Probability that the computer's move is skewed.
    ///
    /// Above 0.5 the skew favors the player, below 0.5 it favors the computer.
    pub fn skew(&self) -> f64 {
        SKEW[*self as usize]
    }

    /// Label shown on the difficulty menu
    pub fn label(&self) -> &'static str {
        LABELS[*self as usize]
    }

    /// Identifier accepted by `FromStr` and printed by `Display`
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::VeryEasy => "very-easy",
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::VeryHard => "very-hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error parsing a difficulty name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown difficulty: {0} (expected very-easy, easy, normal, hard or very-hard)")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == wanted)
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}
