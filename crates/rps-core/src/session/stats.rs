//! Stats snapshot backing the "Current Stats" chart.

use super::setup::MatchSetup;
use super::state::MatchState;
use super::types::{MatchPhase, SessionId};
use crate::games::Difficulty;
use serde::{Deserialize, Serialize};

/// One chart slice
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatsSlice {
    pub label: String,
    pub count: u32,
    /// Fraction of rounds played, 0.0 when nothing has been played
    pub share: f64,
}

/// Point-in-time copy of a session's counters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub session_id: SessionId,
    pub player: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub phase: MatchPhase,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub rounds_played: u32,
    pub total_rounds: Option<u32>,
    pub slices: Vec<StatsSlice>,
}

impl StatsSnapshot {
    pub(crate) fn new(
        session_id: SessionId,
        phase: MatchPhase,
        state: &MatchState,
        setup: Option<&MatchSetup>,
    ) -> Self {
        let played = state.rounds_played();
        let slice = |label: &str, count: u32| StatsSlice {
            label: label.to_string(),
            count,
            share: if played == 0 {
                0.0
            } else {
                f64::from(count) / f64::from(played)
            },
        };

        Self {
            session_id,
            player: setup.map(|s| s.name().to_string()),
            difficulty: setup.map(|s| s.difficulty()),
            phase,
            wins: state.wins(),
            losses: state.losses(),
            ties: state.ties(),
            rounds_played: played,
            total_rounds: setup.map(|s| s.total_rounds()),
            slices: vec![
                slice("Wins", state.wins()),
                slice("Losses", state.losses()),
                slice("Ties", state.ties()),
            ],
        }
    }

    /// True when no round has been played, so the chart has nothing to show
    pub fn is_empty(&self) -> bool {
        self.rounds_played == 0
    }
}
