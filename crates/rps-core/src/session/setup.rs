//! Validated match setup.

use super::error::SetupError;
use crate::games::Difficulty;
use serde::{Deserialize, Serialize};

/// Player name, round target and difficulty for one match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSetup")]
pub struct MatchSetup {
    name: String,
    total_rounds: u32,
    difficulty: Difficulty,
}

impl MatchSetup {
    pub fn new(
        name: impl Into<String>,
        total_rounds: u32,
        difficulty: Difficulty,
    ) -> Result<Self, SetupError> {
        let name = validate_name(&name.into())?;
        if total_rounds == 0 {
            return Err(SetupError::NonPositiveRounds);
        }
        Ok(Self {
            name,
            total_rounds,
            difficulty,
        })
    }

    /// Build a setup from raw form fields
    pub fn parse(name: &str, rounds: &str, difficulty: Difficulty) -> Result<Self, SetupError> {
        let name = validate_name(name)?;
        let total_rounds = parse_rounds(rounds)?;
        Ok(Self {
            name,
            total_rounds,
            difficulty,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// Unvalidated setup fields as they arrive from JSON
#[derive(Deserialize)]
struct RawSetup {
    name: String,
    total_rounds: u32,
    #[serde(default)]
    difficulty: Difficulty,
}

impl TryFrom<RawSetup> for MatchSetup {
    type Error = SetupError;

    fn try_from(raw: RawSetup) -> Result<Self, Self::Error> {
        MatchSetup::new(raw.name, raw.total_rounds, raw.difficulty)
    }
}

/// Trim a player name and reject it when empty
pub fn validate_name(name: &str) -> Result<String, SetupError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(SetupError::EmptyName);
    }
    Ok(name.to_string())
}

/// Parse a round count, which must be a positive integer
pub fn parse_rounds(input: &str) -> Result<u32, SetupError> {
    let rounds: i64 = input
        .trim()
        .parse()
        .map_err(|_| SetupError::NotAnInteger)?;
    if rounds <= 0 {
        return Err(SetupError::NonPositiveRounds);
    }
    u32::try_from(rounds).map_err(|_| SetupError::NotAnInteger)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_setup() {
        let setup = MatchSetup::parse("  Ada ", " 3 ", Difficulty::Hard).unwrap();
        assert_eq!(setup.name(), "Ada");
        assert_eq!(setup.total_rounds(), 3);
        assert_eq!(setup.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(
            MatchSetup::parse("", "3", Difficulty::Normal),
            Err(SetupError::EmptyName)
        );
        assert_eq!(
            MatchSetup::parse("   ", "3", Difficulty::Normal),
            Err(SetupError::EmptyName)
        );
    }

    #[test]
    fn test_non_positive_rounds_rejected() {
        assert_eq!(parse_rounds("0"), Err(SetupError::NonPositiveRounds));
        assert_eq!(parse_rounds("-4"), Err(SetupError::NonPositiveRounds));
        assert_eq!(
            MatchSetup::new("Ada", 0, Difficulty::Normal),
            Err(SetupError::NonPositiveRounds)
        );
    }

    #[test]
    fn test_non_integer_rounds_rejected() {
        assert_eq!(parse_rounds("three"), Err(SetupError::NotAnInteger));
        assert_eq!(parse_rounds("2.5"), Err(SetupError::NotAnInteger));
        assert_eq!(parse_rounds(""), Err(SetupError::NotAnInteger));
        assert_eq!(parse_rounds("99999999999"), Err(SetupError::NotAnInteger));
    }

    #[test]
    fn test_deserialize_validates_fields() {
        let setup: MatchSetup =
            serde_json::from_str(r#"{"name":" Ada ","total_rounds":3,"difficulty":"hard"}"#)
                .unwrap();
        assert_eq!(setup, MatchSetup::new("Ada", 3, Difficulty::Hard).unwrap());

        let err = serde_json::from_str::<MatchSetup>(
            r#"{"name":"","total_rounds":3,"difficulty":"normal"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("You must enter a name."));

        let err = serde_json::from_str::<MatchSetup>(
            r#"{"name":"Ada","total_rounds":0,"difficulty":"normal"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Please enter a positive integer."));
    }

    #[test]
    fn test_serialized_setup_reads_back() {
        let setup = MatchSetup::new("Ada", 5, Difficulty::VeryEasy).unwrap();
        let json = serde_json::to_string(&setup).unwrap();
        assert_eq!(serde_json::from_str::<MatchSetup>(&json).unwrap(), setup);
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(SetupError::EmptyName.to_string(), "You must enter a name.");
        assert_eq!(
            SetupError::NonPositiveRounds.to_string(),
            "Please enter a positive integer."
        );
        assert_eq!(
            SetupError::NotAnInteger.to_string(),
            "You must provide an integer for the number of rounds."
        );
    }
}
