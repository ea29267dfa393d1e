//! Typed identifier newtypes backed by validated strings.
//!
//! Workspace identifiers and account logins are user-chosen, human-readable
//! strings. Validation happens once at construction so the rest of the
//! workspace can treat an identifier as always well-formed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Longest accepted identifier, in characters.
pub const MAX_ID_LEN: usize = 50;

/// Check the identifier character set: `[A-Za-z0-9._-]`, non-empty,
/// at most [`MAX_ID_LEN`] characters.
fn validate(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyId);
    }
    if value.chars().count() > MAX_ID_LEN {
        return Err(ValidationError::IdTooLong { max: MAX_ID_LEN });
    }
    if let Some(found) = value
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && !matches!(c, '-' | '_' | '.'))
    {
        return Err(ValidationError::InvalidIdCharacter { found });
    }
    Ok(())
}

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and wrap a raw identifier.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError`] when the value is empty, longer
            /// than [`MAX_ID_LEN`] characters, or contains a character
            /// outside `[A-Za-z0-9._-]`.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                validate(&value)?;
                Ok(Self(value))
            }

            /// View the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// Identifier of a [`Workspace`](crate::workspace::Workspace).
    WorkspaceId
);

define_id!(
    /// Login of an [`Account`](crate::account::Account).
    Login
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_alphanumeric_identifier() {
        let id = WorkspaceId::new("wks-001").unwrap();
        assert_eq!(id.as_str(), "wks-001");
    }

    #[test]
    fn should_accept_dots_and_underscores() {
        assert!(WorkspaceId::new("team_a.v2").is_ok());
    }

    #[test]
    fn should_reject_empty_identifier() {
        assert_eq!(WorkspaceId::new(""), Err(ValidationError::EmptyId));
    }

    #[test]
    fn should_reject_forbidden_character() {
        assert_eq!(
            WorkspaceId::new("my workspace"),
            Err(ValidationError::InvalidIdCharacter { found: ' ' })
        );
    }

    #[test]
    fn should_reject_identifier_longer_than_max() {
        let long = "w".repeat(MAX_ID_LEN + 1);
        assert_eq!(
            WorkspaceId::new(long),
            Err(ValidationError::IdTooLong { max: MAX_ID_LEN })
        );
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = Login::new("jdoe").unwrap();
        let parsed: Login = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_plain_json_string() {
        let id = WorkspaceId::new("W1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"W1\"");
    }

    #[test]
    fn should_reject_invalid_identifier_when_deserializing() {
        let result: Result<WorkspaceId, _> = serde_json::from_str("\"a/b\"");
        assert!(result.is_err());
    }
}
