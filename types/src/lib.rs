//! Core domain types for Arda.
//!
//! This crate contains pure decode targets with no IO, no async, and minimal
//! dependencies. Every type here mirrors a JSON shape returned by the external
//! lore API: entities arrive wrapped in the [`Paged`] envelope (even singular
//! lookups, an upstream quirk the client preserves), decode once, and are never
//! mutated afterwards.
//!
//! Unknown JSON keys are ignored. Missing optional fields decode to `None`.
//! A missing or empty `_id` is a decode error, enforced by [`EntityId`].

mod models;
mod paged;

pub use models::{Book, Chapter, Character, Movie, Quote};
pub use paged::Paged;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// An entity identifier, guaranteed non-empty.
///
/// The upstream API identifies every record by an opaque `_id` string.
/// Cross-entity references (the movie id inside a [`Quote`], the book id
/// inside a [`Chapter`]) are carried as `EntityId` values and never
/// dereferenced by this layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(String);

#[derive(Debug, Error)]
#[error("entity id must not be empty")]
pub struct EmptyIdError;

impl EntityId {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyIdError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(EmptyIdError)
        } else {
            Ok(Self(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for EntityId {
    type Error = EmptyIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::EntityId;
    use pretty_assertions::assert_eq;

    #[test]
    fn entity_id_accepts_non_empty() {
        let id = EntityId::new("5cf5805fb53e011a64671582").unwrap();
        assert_eq!(id.as_str(), "5cf5805fb53e011a64671582");
    }

    #[test]
    fn entity_id_rejects_empty() {
        assert!(EntityId::new("").is_err());
        assert!(EntityId::new("   ").is_err());
    }

    #[test]
    fn entity_id_decode_rejects_empty_json_string() {
        let result: Result<EntityId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn entity_id_round_trips_through_json() {
        let id = EntityId::new("abc123").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc123\"");
        let back: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
