//! Workspace — a tenant unit holding documents, parts, users, and products.

use serde::{Deserialize, Serialize};

use crate::error::{PlmHubError, ValidationError};
use crate::id::{Login, WorkspaceId};
use crate::time::{self, Timestamp};

/// A tenant/organizational unit of the PLM server.
///
/// The id doubles as the display name; it is chosen by the creator and
/// never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    pub id: WorkspaceId,
    #[serde(default)]
    pub description: String,
    /// Login of the workspace administrator.
    pub admin: Login,
    /// Whether members may reorganize the folder tree.
    #[serde(default)]
    pub folder_locked: bool,
    pub created_at: Timestamp,
}

impl Workspace {
    /// Create a builder for constructing a [`Workspace`].
    #[must_use]
    pub fn builder() -> WorkspaceBuilder {
        WorkspaceBuilder::default()
    }
}

/// Step-by-step builder for [`Workspace`].
#[derive(Debug, Default)]
pub struct WorkspaceBuilder {
    id: Option<String>,
    description: String,
    admin: Option<String>,
    folder_locked: bool,
    created_at: Option<Timestamp>,
}

impl WorkspaceBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn admin(mut self, admin: impl Into<String>) -> Self {
        self.admin = Some(admin.into());
        self
    }

    #[must_use]
    pub fn folder_locked(mut self, locked: bool) -> Self {
        self.folder_locked = locked;
        self
    }

    #[must_use]
    pub fn created_at(mut self, at: Timestamp) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Consume the builder, validate, and return a [`Workspace`].
    ///
    /// # Errors
    ///
    /// Returns [`PlmHubError::Validation`] if the id is missing or
    /// malformed, or if no administrator was named.
    pub fn build(self) -> Result<Workspace, PlmHubError> {
        let id = WorkspaceId::new(self.id.unwrap_or_default())?;
        let admin = match self.admin {
            Some(login) => Login::new(login)?,
            None => return Err(ValidationError::MissingAdmin.into()),
        };
        Ok(Workspace {
            id,
            description: self.description,
            admin,
            folder_locked: self.folder_locked,
            created_at: self.created_at.unwrap_or_else(time::now),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_workspace_when_id_and_admin_provided() {
        let workspace = Workspace::builder()
            .id("wks-001")
            .admin("jdoe")
            .build()
            .unwrap();
        assert_eq!(workspace.id.as_str(), "wks-001");
        assert_eq!(workspace.admin.as_str(), "jdoe");
        assert!(workspace.description.is_empty());
        assert!(!workspace.folder_locked);
    }

    #[test]
    fn should_return_validation_error_when_id_is_missing() {
        let result = Workspace::builder().admin("jdoe").build();
        assert!(matches!(
            result,
            Err(PlmHubError::Validation(ValidationError::EmptyId))
        ));
    }

    #[test]
    fn should_return_validation_error_when_admin_is_missing() {
        let result = Workspace::builder().id("wks-001").build();
        assert!(matches!(
            result,
            Err(PlmHubError::Validation(ValidationError::MissingAdmin))
        ));
    }

    #[test]
    fn should_return_validation_error_when_id_is_malformed() {
        let result = Workspace::builder().id("no spaces").admin("jdoe").build();
        assert!(matches!(
            result,
            Err(PlmHubError::Validation(
                ValidationError::InvalidIdCharacter { found: ' ' }
            ))
        ));
    }

    #[test]
    fn should_keep_description_and_folder_lock() {
        let workspace = Workspace::builder()
            .id("wks-002")
            .admin("jdoe")
            .description("Airframe program")
            .folder_locked(true)
            .build()
            .unwrap();
        assert_eq!(workspace.description, "Airframe program");
        assert!(workspace.folder_locked);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let workspace = Workspace::builder()
            .id("wks-003")
            .admin("asmith")
            .description("Powertrain")
            .build()
            .unwrap();
        let json = serde_json::to_string(&workspace).unwrap();
        let parsed: Workspace = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, workspace.id);
        assert_eq!(parsed.admin, workspace.admin);
        assert_eq!(parsed.description, workspace.description);
        assert_eq!(parsed.created_at, workspace.created_at);
    }

    #[test]
    fn should_default_missing_optional_fields_when_deserializing() {
        let workspace: Workspace = serde_json::from_str(
            r#"{"id":"W1","admin":"jdoe","created_at":"2017-03-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert!(workspace.description.is_empty());
        assert!(!workspace.folder_locked);
    }
}
