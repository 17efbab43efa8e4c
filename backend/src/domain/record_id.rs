//! Opaque identifier shared by every stored collection.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Error returned when an identifier is blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyRecordId;

impl fmt::Display for EmptyRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record id must not be empty")
    }
}

impl std::error::Error for EmptyRecordId {}

/// Identifier of a destination, program or user.
///
/// New records receive a v4 UUID. Stored data may carry any non-blank string
/// (the seed programs use `"1"` through `"8"`), so no format is enforced.
///
/// # Examples
/// ```
/// use scholar::domain::RecordId;
///
/// let id = RecordId::new("u1").expect("non-blank");
/// assert_eq!(id.as_ref(), "u1");
/// assert!(RecordId::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Validate and wrap an identifier.
    pub fn new(id: impl Into<String>) -> Result<Self, EmptyRecordId> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(EmptyRecordId);
        }
        Ok(Self(id))
    }

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl TryFrom<String> for RecordId {
    type Error = EmptyRecordId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn rejects_blank(#[case] raw: &str) {
        assert_eq!(RecordId::new(raw), Err(EmptyRecordId));
    }

    #[rstest]
    fn random_ids_are_uuids() {
        let id = RecordId::random();
        assert!(Uuid::parse_str(id.as_ref()).is_ok());
        assert_ne!(id, RecordId::random());
    }

    #[rstest]
    fn deserialisation_rejects_blank_strings() {
        assert!(serde_json::from_str::<RecordId>("\"\"").is_err());
        let id: RecordId = serde_json::from_str("\"7\"").expect("valid id");
        assert_eq!(id.as_ref(), "7");
    }
}
