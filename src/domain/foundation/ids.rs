//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for a generated reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadingId(Uuid);

impl ReadingId {
    /// Creates a new random ReadingId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ReadingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReadingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReadingId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Catalog identifier of a card, e.g. `"cups-7"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardId(String);

impl CardId {
    /// Creates a CardId, trimming whitespace and rejecting blank input.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("card_id"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CardId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CardId::new(value)
    }
}

impl From<CardId> for String {
    fn from(id: CardId) -> Self {
        id.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_id_new_is_unique() {
        assert_ne!(ReadingId::new(), ReadingId::new());
    }

    #[test]
    fn reading_id_round_trips_through_string() {
        let id = ReadingId::new();
        let parsed: ReadingId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn reading_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<ReadingId>().is_err());
    }

    #[test]
    fn card_id_trims_whitespace() {
        let id = CardId::new("  cups-7 ").unwrap();
        assert_eq!(id.as_str(), "cups-7");
    }

    #[test]
    fn card_id_rejects_blank() {
        assert_eq!(
            CardId::new("   ").unwrap_err(),
            ValidationError::empty_field("card_id")
        );
    }

    #[test]
    fn card_id_deserialization_validates() {
        let ok: CardId = serde_json::from_str("\"major-0\"").unwrap();
        assert_eq!(ok.as_str(), "major-0");
        assert!(serde_json::from_str::<CardId>("\"\"").is_err());
    }
}
