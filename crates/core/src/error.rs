//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Both variants are raised while building an inventory, never while updating
/// one. The caller has to fix the input and construct again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument was unusable as a whole (e.g. an empty item list).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A value did not have the shape of an item.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn type_mismatch(msg: impl Into<String>) -> Self {
        Self::TypeMismatch(msg.into())
    }
}
