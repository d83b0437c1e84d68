//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a movie.
///
/// Opaque to the domain: stores may hand out any non-empty string. Freshly
/// generated ids are UUIDv7 (time-ordered) rendered as text.
///
/// Deserialization goes through the same non-empty check as `FromStr`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MovieId(String);

impl MovieId {
    /// Generate a new identifier.
    pub fn generate() -> Self {
        Uuid::now_v7().into()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for MovieId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MovieId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl TryFrom<String> for MovieId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(DomainError::invalid_id("MovieId: empty"));
        }
        Ok(Self(value))
    }
}

impl From<MovieId> for String {
    fn from(value: MovieId) -> Self {
        value.into_inner()
    }
}

impl From<Uuid> for MovieId {
    fn from(value: Uuid) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_uuids() {
        let a = MovieId::generate();
        let b = MovieId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn parse_accepts_any_non_empty_text() {
        let id: MovieId = "tt0816692".parse().unwrap();
        assert_eq!(id.as_str(), "tt0816692");
        assert!("".parse::<MovieId>().is_err());
    }

    #[test]
    fn deserialize_rejects_empty_id() {
        assert!(serde_json::from_str::<MovieId>("\"\"").is_err());
        let id: MovieId = serde_json::from_str("\"m1\"").unwrap();
        assert_eq!(id.as_str(), "m1");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id: MovieId = "abc".parse().unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }
}
