use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
mod components;
pub mod config;
pub mod i18n;
mod pages;

use components::{Nav, ToastContainer};
use config::AppConfig;
use pages::{NotFound, WorkspaceCreate, WorkspaceDetail, Workspaces};

/// Root application component.
///
/// Installs the session configuration into context before any child
/// renders, so every component sees the same read-only settings.
#[component]
pub fn App(
    /// Session configuration. Defaults to what the browser environment
    /// provides; tests inject their own.
    #[prop(optional)]
    config: Option<AppConfig>,
) -> impl IntoView {
    provide_context(config.unwrap_or_else(AppConfig::load));

    view! {
        <ToastContainer>
            <Router>
                <Nav/>
                <main>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=Workspaces/>
                        <Route path=path!("create") view=WorkspaceCreate/>
                        <Route path=path!("workspaces/:id") view=WorkspaceDetail/>
                    </Routes>
                </main>
            </Router>
        </ToastContainer>
    }
}
