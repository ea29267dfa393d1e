//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`;
//! no `String` variants.

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum PlmHubError {
    #[error("Validation error")]
    Validation(#[from] ValidationError),
}

/// Violation of a domain invariant, reported at construction time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("identifier must not be empty")]
    EmptyId,
    #[error("identifier must be at most {max} characters")]
    IdTooLong { max: usize },
    #[error("identifier contains forbidden character {found:?}")]
    InvalidIdCharacter { found: char },
    #[error("workspace must name an administrator")]
    MissingAdmin,
}
