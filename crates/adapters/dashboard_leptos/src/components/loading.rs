//! Loading spinner component.

use leptos::prelude::*;

use crate::config::use_config;

/// A loading indicator with an animated spinner and optional message.
#[component]
pub fn Loading(
    /// Text shown next to the spinner. Defaults to the localized
    /// "Loading…".
    #[prop(optional, into)]
    message: Option<String>,
) -> impl IntoView {
    let message = message.unwrap_or_else(|| use_config().i18n.get("loading").to_string());

    view! {
        <div class="loading">
            <span class="spinner"></span>
            <span>{message}</span>
        </div>
    }
}
