//! Cumulative match counters.

use crate::games::Outcome;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Win/loss/tie counters and the round about to be played.
///
/// `wins + losses + ties == current_round - 1` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawState")]
pub struct MatchState {
    wins: u32,
    losses: u32,
    ties: u32,
    current_round: u32,
}

impl MatchState {
    pub fn new() -> Self {
        Self {
            wins: 0,
            losses: 0,
            ties: 0,
            current_round: 1,
        }
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// 1-based number of the next round to play
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn rounds_played(&self) -> u32 {
        self.current_round.saturating_sub(1)
    }

    /// Count one resolved round
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWins => self.wins += 1,
            Outcome::ComputerWins => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
        self.current_round += 1;
    }

    /// Zero all counters and go back to round 1
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Counters that do not add up to the rounds already played
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error(
    "inconsistent counters: {wins} wins, {losses} losses and {ties} ties before round {current_round}"
)]
pub struct InconsistentCounters {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub current_round: u32,
}

#[derive(Deserialize)]
struct RawState {
    wins: u32,
    losses: u32,
    ties: u32,
    current_round: u32,
}

impl TryFrom<RawState> for MatchState {
    type Error = InconsistentCounters;

    fn try_from(raw: RawState) -> Result<Self, Self::Error> {
        let counted = raw
            .wins
            .checked_add(raw.losses)
            .and_then(|n| n.checked_add(raw.ties));
        match (counted, raw.current_round.checked_sub(1)) {
            (Some(counted), Some(played)) if counted == played => Ok(Self {
                wins: raw.wins,
                losses: raw.losses,
                ties: raw.ties,
                current_round: raw.current_round,
            }),
            _ => Err(InconsistentCounters {
                wins: raw.wins,
                losses: raw.losses,
                ties: raw.ties,
                current_round: raw.current_round,
            }),
        }
    }
}
