//! Consecutive-rock detection for the "ROCK OUT!" popup.

use crate::games::Move;

/// Consecutive Rock picks needed to rock out
pub const ROCK_OUT_LENGTH: u32 = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RockOutStreak {
    count: u32,
}

impl RockOutStreak {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current run of consecutive Rock picks
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Track the player's move; returns true when the run reaches
    /// `ROCK_OUT_LENGTH`, which also starts a new run.
    pub fn observe(&mut self, player: Move) -> bool {
        if player != Move::Rock {
            self.count = 0;
            return false;
        }
        self.count += 1;
        if self.count >= ROCK_OUT_LENGTH {
            self.count = 0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}
