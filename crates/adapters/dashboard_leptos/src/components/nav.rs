use leptos::prelude::*;

use crate::components::LanguageToggle;
use crate::config::use_config;

#[component]
pub fn Nav() -> impl IntoView {
    let i18n = use_config().i18n;

    view! {
        <nav>
            <ul>
                <li><a href="/">{i18n.get("home")}</a></li>
                <li><a href="/create">{i18n.get("new-workspace")}</a></li>
            </ul>
            <LanguageToggle/>
        </nav>
    }
}
