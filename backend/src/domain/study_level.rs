//! Study level shared by destinations and programs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Academic level a destination or program applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum StudyLevel {
    Undergraduate,
    Postgraduate,
}

impl StudyLevel {
    /// Wire spelling of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undergraduate => "Undergraduate",
            Self::Postgraduate => "Postgraduate",
        }
    }
}

impl fmt::Display for StudyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known study level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStudyLevel(pub String);

impl fmt::Display for UnknownStudyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown study level `{}`; expected Undergraduate or Postgraduate",
            self.0
        )
    }
}

impl std::error::Error for UnknownStudyLevel {}

impl FromStr for StudyLevel {
    type Err = UnknownStudyLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Undergraduate" => Ok(Self::Undergraduate),
            "Postgraduate" => Ok(Self::Postgraduate),
            other => Err(UnknownStudyLevel(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Undergraduate", StudyLevel::Undergraduate)]
    #[case(" Postgraduate ", StudyLevel::Postgraduate)]
    fn parses_known_levels(#[case] raw: &str, #[case] expected: StudyLevel) {
        assert_eq!(raw.parse::<StudyLevel>(), Ok(expected));
    }

    #[rstest]
    #[case("undergraduate")]
    #[case("PhD")]
    #[case("")]
    fn rejects_unknown_levels(#[case] raw: &str) {
        assert!(raw.parse::<StudyLevel>().is_err());
    }
}
