//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Machine-readable reason attached to an invalid-argument failure.
///
/// Rendered on the wire as the lowercase key (`idexists`, `idnull`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKey {
    /// A new entity arrived with an identifier already set.
    IdExists,
    /// An existing entity arrived without an identifier.
    IdNull,
}

impl ErrorKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKey::IdExists => "idexists",
            ErrorKey::IdNull => "idnull",
        }
    }
}

impl core::fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain-level error.
///
/// Keep this focused on deterministic request failures. Storage and transport
/// concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The caller supplied an entity that violates an identity precondition.
    #[error("{message} ({entity}.{key})")]
    InvalidArgument {
        entity: &'static str,
        key: ErrorKey,
        message: String,
    },

    /// An identifier was invalid (e.g. empty).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_argument(entity: &'static str, key: ErrorKey, msg: impl Into<String>) -> Self {
        Self::InvalidArgument {
            entity,
            key,
            message: msg.into(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
