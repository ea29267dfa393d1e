use leptos::prelude::*;

use crate::config::use_config;

/// Fallback page for unknown routes.
#[component]
pub fn NotFound() -> impl IntoView {
    let i18n = use_config().i18n;

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Nothing lives at this address."</p>
            <p><a href="/">{i18n.get("back")}</a></p>
        </div>
    }
}
