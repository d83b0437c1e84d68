//! Entity trait: identity + continuity across state changes.

use crate::error::{DomainError, DomainResult, ErrorKey};

/// Entity marker + minimal interface.
///
/// Identity is optional: an entity has no id until a store persists it.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Lowercase entity name used in error payloads and alert headers.
    const NAME: &'static str;

    /// Returns the entity identifier, if it has been assigned.
    fn id(&self) -> Option<&Self::Id>;

    /// Require that the entity has never been persisted.
    fn ensure_unsaved(&self) -> DomainResult<()> {
        match self.id() {
            Some(_) => Err(DomainError::invalid_argument(
                Self::NAME,
                ErrorKey::IdExists,
                format!("A new {} cannot already have an ID", Self::NAME),
            )),
            None => Ok(()),
        }
    }

    /// Require that the entity carries an identifier, returning it.
    fn ensure_saved(&self) -> DomainResult<&Self::Id> {
        self.id().ok_or_else(|| {
            DomainError::invalid_argument(Self::NAME, ErrorKey::IdNull, "Invalid id")
        })
    }
}
