//! Account — the authenticated viewer of the dashboard.

use serde::{Deserialize, Serialize};

use crate::id::Login;
use crate::workspace::Workspace;

/// A user account as returned by the accounts endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub login: Login,
    pub name: String,
    pub email: String,
    /// Preferred display language tag, e.g. `"en"`.
    #[serde(default)]
    pub language: String,
    /// Whether the account is a platform-wide administrator.
    #[serde(default)]
    pub admin: bool,
}

impl Account {
    /// Whether this account administrates the given workspace.
    ///
    /// Platform administrators administrate every workspace; otherwise
    /// only the workspace's own admin does.
    #[must_use]
    pub fn administrates(&self, workspace: &Workspace) -> bool {
        self.admin || self.login == workspace.admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(login: &str, admin: bool) -> Account {
        Account {
            login: Login::new(login).unwrap(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            language: "en".to_string(),
            admin,
        }
    }

    fn workspace(admin: &str) -> Workspace {
        Workspace::builder().id("wks-001").admin(admin).build().unwrap()
    }

    #[test]
    fn should_administrate_own_workspace() {
        assert!(account("jdoe", false).administrates(&workspace("jdoe")));
    }

    #[test]
    fn should_not_administrate_foreign_workspace() {
        assert!(!account("jdoe", false).administrates(&workspace("asmith")));
    }

    #[test]
    fn should_administrate_any_workspace_as_platform_admin() {
        assert!(account("jdoe", true).administrates(&workspace("asmith")));
    }

    #[test]
    fn should_default_admin_flag_to_false_when_deserializing() {
        let parsed: Account = serde_json::from_str(
            r#"{"login":"jdoe","name":"Jane Doe","email":"jane@example.com"}"#,
        )
        .unwrap();
        assert!(!parsed.admin);
        assert!(parsed.language.is_empty());
    }
}
