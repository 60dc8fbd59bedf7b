//! Session and setup errors.

use thiserror::Error;

/// Rejected setup form input. The message is shown to the player as-is.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("You must enter a name.")]
    EmptyName,

    #[error("Please enter a positive integer.")]
    NonPositiveRounds,

    #[error("You must provide an integer for the number of rounds.")]
    NotAnInteger,
}

/// Errors from match session operations
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("The match has not started")]
    NotStarted,

    #[error("A match is already running; reset it first")]
    AlreadyStarted,

    #[error("GAME OVER")]
    MatchFinished,

    #[error("No match has been set up yet")]
    NoSetup,

    #[error(transparent)]
    Setup(#[from] SetupError),
}
