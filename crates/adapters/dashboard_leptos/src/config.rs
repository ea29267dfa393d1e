//! Ambient application configuration shared by every component.
//!
//! The settings are assembled once at boot and provided through Leptos
//! context instead of a process-wide global, so tests can inject their
//! own [`AppConfig`].

use leptos::prelude::*;

use crate::i18n::{I18n, Language};

/// Key used to persist the language preference in `localStorage`.
const STORAGE_KEY: &str = "plmhub-language";

/// Read-only session configuration: the localization table and whether
/// the viewer is a platform-wide administrator.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub i18n: I18n,
    pub admin: bool,
}

impl AppConfig {
    /// Build the configuration from the browser environment.
    ///
    /// The language comes from `localStorage` when a preference was saved,
    /// falling back to the browser language, then to English.
    #[must_use]
    pub fn load() -> Self {
        let language = stored_language()
            .or_else(browser_language)
            .and_then(|tag| Language::from_tag(&tag))
            .unwrap_or_default();
        Self {
            i18n: I18n::new(language),
            admin: false,
        }
    }
}

/// Access the application configuration from Leptos context.
///
/// Must be called within a component tree that has an
/// [`App`](crate::App) ancestor.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not found in context")
}

/// Persist the language choice for the next session.
pub fn save_language(language: Language) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, language.tag());
    }
}

fn stored_language() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
}

fn browser_language() -> Option<String> {
    web_sys::window().and_then(|w| w.navigator().language())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_english_without_admin_rights() {
        let config = AppConfig::default();
        assert_eq!(config.i18n.language(), Language::En);
        assert!(!config.admin);
    }
}
