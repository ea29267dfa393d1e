//! Localized string table for the dashboard.
//!
//! One table per supported locale; components look strings up by key and
//! fall back to the key itself when a translation is missing.

/// Supported display languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    /// Parse a BCP 47 language tag (`"fr"`, `"fr-FR"`, `"en_US"`, …).
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next().unwrap_or(tag);
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }

    /// The canonical tag for this language.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }
}

/// Localized string lookup for one language.
#[derive(Debug, Clone, Copy, Default)]
pub struct I18n {
    language: Language,
}

impl I18n {
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    #[must_use]
    pub fn language(self) -> Language {
        self.language
    }

    /// Look up a localized string, falling back to the key itself.
    #[must_use]
    pub fn get<'a>(&self, key: &'a str) -> &'a str {
        let table = match self.language {
            Language::En => EN,
            Language::Fr => FR,
        };
        table
            .iter()
            .find(|(k, _)| *k == key)
            .map_or(key, |(_, value)| *value)
    }
}

const EN: &[(&str, &str)] = &[
    ("administration", "Administration"),
    ("administrator", "Administrator"),
    ("back", "Back to workspaces"),
    ("create", "Create"),
    ("create-workspace", "Create a workspace"),
    ("description", "Description"),
    ("documents", "Documents"),
    ("empty", "You are not a member of any workspace yet."),
    ("folder-locked", "Lock the folder structure"),
    ("home", "Workspaces"),
    ("loading", "Loading\u{2026}"),
    ("new-workspace", "New workspace"),
    ("parts", "Parts"),
    ("products", "Products"),
    ("users", "Users"),
    ("workspace-id", "Workspace id"),
];

const FR: &[(&str, &str)] = &[
    ("administration", "Administration"),
    ("administrator", "Administrateur"),
    ("back", "Retour aux espaces de travail"),
    ("create", "Cr\u{e9}er"),
    ("create-workspace", "Cr\u{e9}er un espace de travail"),
    ("description", "Description"),
    ("documents", "Documents"),
    ("empty", "Vous n'\u{ea}tes membre d'aucun espace de travail."),
    ("folder-locked", "Verrouiller l'arborescence des dossiers"),
    ("home", "Espaces de travail"),
    ("loading", "Chargement\u{2026}"),
    ("new-workspace", "Nouvel espace de travail"),
    ("parts", "Articles"),
    ("products", "Produits"),
    ("users", "Utilisateurs"),
    ("workspace-id", "Identifiant de l'espace de travail"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_look_up_english_string() {
        assert_eq!(I18n::new(Language::En).get("documents"), "Documents");
    }

    #[test]
    fn should_look_up_french_string() {
        assert_eq!(I18n::new(Language::Fr).get("users"), "Utilisateurs");
    }

    #[test]
    fn should_fall_back_to_the_key_for_unknown_strings() {
        assert_eq!(I18n::new(Language::En).get("no-such-key"), "no-such-key");
    }

    #[test]
    fn should_default_to_english() {
        assert_eq!(I18n::default().language(), Language::En);
    }

    #[test]
    fn should_parse_language_tags() {
        assert_eq!(Language::from_tag("fr"), Some(Language::Fr));
        assert_eq!(Language::from_tag("fr-FR"), Some(Language::Fr));
        assert_eq!(Language::from_tag("en_US"), Some(Language::En));
        assert_eq!(Language::from_tag("EN"), Some(Language::En));
        assert_eq!(Language::from_tag("de"), None);
    }
}
