//! RPS Core Library
//!
//! This crate provides the game rules, the difficulty-weighted round
//! resolver, and the match session state machine for a single-player
//! Rock-Paper-Scissors game against the computer.

pub mod games;
pub mod session;

pub use games::{
    resolve_round, Difficulty, DrawSource, Move, Outcome, RandomDraws, RoundResolution,
    ScriptedDraws,
};
pub use session::{
    MatchPhase, MatchSession, MatchSetup, MatchState, RockOutStreak, RoundReport, SessionError,
    SessionId, SetupError, StatsSnapshot,
};
