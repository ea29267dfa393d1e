//! Language toggle button using `localStorage` for persistence.

use leptos::prelude::*;

use crate::config::{save_language, use_config};
use crate::i18n::Language;

/// A button that switches between the supported languages.
///
/// Persists the choice and reloads, so the new table is picked up where
/// the configuration is assembled — at boot.
#[component]
pub fn LanguageToggle() -> impl IntoView {
    let current = use_config().i18n.language();
    let next = match current {
        Language::En => Language::Fr,
        Language::Fr => Language::En,
    };

    let switch = move |_| {
        save_language(next);
        reload();
    };

    view! {
        <button class="language-toggle" on:click=switch title="Switch language">
            {next.tag().to_ascii_uppercase()}
        </button>
    }
}

/// Reload the page so the saved language preference takes effect.
fn reload() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}
