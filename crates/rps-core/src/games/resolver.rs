//! Difficulty-weighted round resolver.
//!
//! The computer always draws a uniform base move first and a skew draw
//! second. The skew draw may then override the base move:
//! - `p > 0.5` and `draw < p`: the computer plays the move that loses to the player
//! - `p < 0.5` and `draw > p`: the computer plays the move that beats the player
//! - otherwise the base move stands

use super::rps::{Move, Outcome};
use crate::session::MatchState;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Source of the two random draws made each round
pub trait DrawSource {
    /// Uniform draw over the three moves
    fn base_move(&mut self) -> Move;

    /// Uniform draw from `[0, 1)`
    fn skew_draw(&mut self) -> f64;
}

/// Draws backed by a `rand` generator
#[derive(Clone, Debug)]
pub struct RandomDraws<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomDraws<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomDraws<StdRng> {
    /// Generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible generator for a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomDraws<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> DrawSource for RandomDraws<R> {
    fn base_move(&mut self) -> Move {
        Move::ALL[self.rng.gen_range(0..Move::ALL.len())]
    }

    fn skew_draw(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Fixed draws, replayed in order; the last pair repeats once the script runs out
#[derive(Clone, Debug)]
pub struct ScriptedDraws {
    script: Vec<(Move, f64)>,
    cursor: usize,
}

impl ScriptedDraws {
    pub fn new(base: Move, skew: f64) -> Self {
        Self {
            script: vec![(base, skew)],
            cursor: 0,
        }
    }

    /// Append another round of draws
    pub fn then(mut self, base: Move, skew: f64) -> Self {
        self.script.push((base, skew));
        self
    }

    fn current(&self) -> (Move, f64) {
        self.script[self.cursor.min(self.script.len() - 1)]
    }
}

impl DrawSource for ScriptedDraws {
    fn base_move(&mut self) -> Move {
        self.current().0
    }

    fn skew_draw(&mut self) -> f64 {
        let (_, skew) = self.current();
        self.cursor = self.cursor.saturating_add(1);
        skew
    }
}

/// Everything decided in one round
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundResolution {
    pub player: Move,
    pub computer: Move,
    /// Uniform move drawn before any skew was applied
    pub base: Move,
    pub skew_draw: f64,
    /// Whether the skew replaced the base move
    pub skewed: bool,
    pub outcome: Outcome,
}

/// Override the base move when the skew triggers
fn skewed_move(player: Move, skew: f64, draw: f64) -> Option<Move> {
    if skew > 0.5 && draw < skew {
        Some(player.prey())
    } else if skew < 0.5 && draw > skew {
        Some(player.counter())
    } else {
        None
    }
}

/// Resolve one round and record it in `state`.
///
/// `skew` is the difficulty's skew probability, always inside `(0, 1)`.
pub fn resolve_round<D: DrawSource + ?Sized>(
    state: &mut MatchState,
    player: Move,
    skew: f64,
    draws: &mut D,
) -> RoundResolution {
    let base = draws.base_move();
    let skew_draw = draws.skew_draw();

    let forced = skewed_move(player, skew, skew_draw);
    let computer = forced.unwrap_or(base);
    let outcome = Outcome::judge(player, computer);

    state.record(outcome);

    debug!(
        %player,
        %computer,
        %base,
        skew,
        skew_draw,
        skewed = forced.is_some(),
        ?outcome,
        "Round resolved"
    );

    RoundResolution {
        player,
        computer,
        base,
        skew_draw,
        skewed: forced.is_some(),
        outcome,
    }
}
