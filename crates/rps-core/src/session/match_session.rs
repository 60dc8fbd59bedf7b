//! Match session state machine.
//!
//! `NotStarted -> InProgress -> Finished`, with `reset` returning to
//! `NotStarted` from any phase.

use super::error::SessionError;
use super::setup::MatchSetup;
use super::state::MatchState;
use super::stats::StatsSnapshot;
use super::streak::RockOutStreak;
use super::types::{MatchPhase, SessionId};
use crate::games::{resolve_round, DrawSource, Move, RandomDraws, RoundResolution};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Result of one played round, as shown to the player
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    /// Round that was just played (1-based)
    pub round: u32,
    pub resolution: RoundResolution,
    /// Counters after the round
    pub state: MatchState,
    /// Phase after the round
    pub phase: MatchPhase,
    /// Fifth consecutive Rock pick
    pub rock_out: bool,
}

/// One bounded sequence of rounds against the computer.
///
/// The session owns its counters; callers only observe them through
/// `state()` and `stats()`.
#[derive(Debug)]
pub struct MatchSession<D = RandomDraws> {
    id: SessionId,
    phase: MatchPhase,
    setup: Option<MatchSetup>,
    state: MatchState,
    streak: RockOutStreak,
    draws: D,
}

impl MatchSession<RandomDraws> {
    /// Session drawing from an entropy-seeded generator
    pub fn new() -> Self {
        Self::with_draws(RandomDraws::from_entropy())
    }

    /// Session with reproducible draws
    pub fn seeded(seed: u64) -> Self {
        Self::with_draws(RandomDraws::seeded(seed))
    }
}

impl Default for MatchSession<RandomDraws> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DrawSource> MatchSession<D> {
    pub fn with_draws(draws: D) -> Self {
        Self {
            id: SessionId::new(),
            phase: MatchPhase::NotStarted,
            setup: None,
            state: MatchState::new(),
            streak: RockOutStreak::new(),
            draws,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn setup(&self) -> Option<&MatchSetup> {
        self.setup.as_ref()
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        self.phase == MatchPhase::Finished
    }

    /// Begin a match. Only allowed from `NotStarted`.
    pub fn start(&mut self, setup: MatchSetup) -> Result<(), SessionError> {
        if self.phase != MatchPhase::NotStarted {
            return Err(SessionError::AlreadyStarted);
        }
        self.begin(setup);
        Ok(())
    }

    /// Play the same setup again from round 1
    pub fn restart(&mut self) -> Result<(), SessionError> {
        let setup = self.setup.take().ok_or(SessionError::NoSetup)?;
        self.begin(setup);
        Ok(())
    }

    fn begin(&mut self, setup: MatchSetup) {
        self.id = SessionId::new();
        self.state.reset();
        self.streak.reset();
        self.phase = MatchPhase::InProgress;

        info!(
            session_id = %self.id,
            player = setup.name(),
            difficulty = setup.difficulty().as_str(),
            total_rounds = setup.total_rounds(),
            "Match started"
        );

        self.setup = Some(setup);
    }

    /// Resolve the player's move for the current round
    pub fn play(&mut self, player: Move) -> Result<RoundReport, SessionError> {
        match self.phase {
            MatchPhase::NotStarted => return Err(SessionError::NotStarted),
            MatchPhase::Finished => return Err(SessionError::MatchFinished),
            MatchPhase::InProgress => {}
        }
        let (skew, total_rounds) = match &self.setup {
            Some(setup) => (setup.difficulty().skew(), setup.total_rounds()),
            None => return Err(SessionError::NoSetup),
        };

        let round = self.state.current_round();
        let resolution = resolve_round(&mut self.state, player, skew, &mut self.draws);
        let rock_out = self.streak.observe(player);

        if self.state.current_round() > total_rounds {
            self.phase = MatchPhase::Finished;
            info!(
                session_id = %self.id,
                wins = self.state.wins(),
                losses = self.state.losses(),
                ties = self.state.ties(),
                "Match finished"
            );
        }

        Ok(RoundReport {
            round,
            resolution,
            state: self.state,
            phase: self.phase,
            rock_out,
        })
    }

    /// Zero the counters and return to `NotStarted`, dropping the setup
    pub fn reset(&mut self) {
        self.state.reset();
        self.streak.reset();
        self.setup = None;
        self.phase = MatchPhase::NotStarted;
        info!(session_id = %self.id, "Match reset");
    }

    pub fn stats(&self) -> StatsSnapshot {
        StatsSnapshot::new(self.id, self.phase, &self.state, self.setup.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{Difficulty, Outcome, ScriptedDraws};
    use crate::session::SetupError;

    fn setup(rounds: u32, difficulty: Difficulty) -> MatchSetup {
        MatchSetup::new("Ada", rounds, difficulty).unwrap()
    }

    #[test]
    fn test_new_session_not_started() {
        let session = MatchSession::seeded(1);
        assert_eq!(session.phase(), MatchPhase::NotStarted);
        assert_eq!(session.state().current_round(), 1);
        assert!(session.setup().is_none());
    }

    #[test]
    fn test_play_before_start_rejected() {
        let mut session = MatchSession::seeded(1);
        assert_eq!(session.play(Move::Rock), Err(SessionError::NotStarted));
        assert_eq!(session.state().rounds_played(), 0);
    }

    #[test]
    fn test_start_twice_rejected() {
        let mut session = MatchSession::seeded(1);
        session.start(setup(3, Difficulty::Normal)).unwrap();
        assert_eq!(
            session.start(setup(3, Difficulty::Normal)),
            Err(SessionError::AlreadyStarted)
        );
    }

    #[test]
    fn test_finishes_after_total_rounds() {
        let mut session = MatchSession::seeded(9);
        session.start(setup(3, Difficulty::Normal)).unwrap();

        for expected_round in 1..=3 {
            let report = session.play(Move::Paper).unwrap();
            assert_eq!(report.round, expected_round);
        }

        assert_eq!(session.state().current_round(), 4);
        assert_eq!(session.phase(), MatchPhase::Finished);
        assert_eq!(session.play(Move::Rock), Err(SessionError::MatchFinished));
        assert_eq!(session.state().rounds_played(), 3);
    }

    #[test]
    fn test_last_report_carries_finished_phase() {
        let mut session = MatchSession::seeded(3);
        session.start(setup(1, Difficulty::Easy)).unwrap();

        let report = session.play(Move::Scissors).unwrap();
        assert_eq!(report.phase, MatchPhase::Finished);
        assert_eq!(report.state.rounds_played(), 1);
    }

    #[test]
    fn test_uses_difficulty_skew() {
        let draws = ScriptedDraws::new(Move::Rock, 0.1);
        let mut session = MatchSession::with_draws(draws);
        session.start(setup(5, Difficulty::VeryEasy)).unwrap();

        let report = session.play(Move::Rock).unwrap();
        assert_eq!(report.resolution.computer, Move::Scissors);
        assert_eq!(report.resolution.outcome, Outcome::PlayerWins);
        assert_eq!(session.state().wins(), 1);
    }

    #[test]
    fn test_reset_returns_to_not_started() {
        let mut session = MatchSession::seeded(5);
        session.start(setup(2, Difficulty::Hard)).unwrap();
        session.play(Move::Rock).unwrap();
        session.play(Move::Rock).unwrap();
        assert!(session.is_finished());

        session.reset();
        assert_eq!(session.phase(), MatchPhase::NotStarted);
        assert_eq!(*session.state(), MatchState::new());
        assert!(session.setup().is_none());

        session.reset();
        assert_eq!(*session.state(), MatchState::new());
    }

    #[test]
    fn test_restart_keeps_setup() {
        let mut session = MatchSession::seeded(5);
        session.start(setup(2, Difficulty::Hard)).unwrap();
        let first_id = session.id();
        session.play(Move::Paper).unwrap();

        session.restart().unwrap();
        assert_eq!(session.phase(), MatchPhase::InProgress);
        assert_eq!(session.state().rounds_played(), 0);
        assert_eq!(session.setup().unwrap().total_rounds(), 2);
        assert_ne!(session.id(), first_id);
    }

    #[test]
    fn test_restart_without_setup_rejected() {
        let mut session = MatchSession::seeded(5);
        assert_eq!(session.restart(), Err(SessionError::NoSetup));
    }

    #[test]
    fn test_rock_out_reported_on_fifth_rock() {
        let mut session = MatchSession::seeded(11);
        session.start(setup(10, Difficulty::Normal)).unwrap();

        let flags: Vec<bool> = (0..5)
            .map(|_| session.play(Move::Rock).unwrap().rock_out)
            .collect();
        assert_eq!(flags, vec![false, false, false, false, true]);
    }

    #[test]
    fn test_invalid_json_setup_never_reaches_start() {
        let parsed = serde_json::from_str::<MatchSetup>(
            r#"{"name":"","total_rounds":0,"difficulty":"normal"}"#,
        );
        assert!(parsed.is_err());

        let mut session = MatchSession::seeded(1);
        let setup: MatchSetup =
            serde_json::from_str(r#"{"name":"Ada","total_rounds":1,"difficulty":"normal"}"#)
                .unwrap();
        session.start(setup).unwrap();
        session.play(Move::Rock).unwrap();
        assert!(session.is_finished());
        assert_eq!(session.stats().rounds_played, 1);
    }

    #[test]
    fn test_setup_error_converts() {
        let err: SessionError = SetupError::EmptyName.into();
        assert_eq!(err.to_string(), "You must enter a name.");
    }

    #[test]
    fn test_stats_reflect_setup() {
        let mut session = MatchSession::seeded(2);
        session.start(setup(4, Difficulty::VeryHard)).unwrap();
        session.play(Move::Rock).unwrap();

        let stats = session.stats();
        assert_eq!(stats.player.as_deref(), Some("Ada"));
        assert_eq!(stats.difficulty, Some(Difficulty::VeryHard));
        assert_eq!(stats.total_rounds, Some(4));
        assert_eq!(stats.rounds_played, 1);
        assert_eq!(stats.wins + stats.losses + stats.ties, 1);
        assert_eq!(stats.session_id, session.id());
    }
}
