//! Match sessions: counters, setup validation and the round lifecycle.

mod error;
mod match_session;
mod setup;
mod state;
mod stats;
mod streak;
mod types;

pub use error::{SessionError, SetupError};
pub use match_session::{MatchSession, RoundReport};
pub use setup::{parse_rounds, validate_name, MatchSetup};
pub use state::{InconsistentCounters, MatchState};
pub use stats::{StatsSlice, StatsSnapshot};
pub use streak::{RockOutStreak, ROCK_OUT_LENGTH};
pub use types::{MatchPhase, SessionId};
