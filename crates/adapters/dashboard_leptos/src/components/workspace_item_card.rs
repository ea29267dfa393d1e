//! Card presenting one workspace's identity and membership statistics.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use plmhub_domain::workspace::Workspace;

use crate::api;
use crate::components::{StatCard, region_count};
use crate::config::use_config;

/// A self-contained card for one workspace: identity, live membership
/// counts, and administration affordances.
///
/// The base card renders immediately. One statistics fetch per card
/// instantiation fills the four count regions once it resolves; a failed
/// fetch leaves them blank. Disposing the card disposes the pending
/// fetch with it.
#[component]
pub fn WorkspaceItemCard(
    /// The workspace to display.
    workspace: Workspace,
    /// Whether the viewer administrates this workspace.
    administrated: bool,
) -> impl IntoView {
    let config = use_config();
    let i18n = config.i18n;
    let show_admin_badge = config.admin || administrated;

    let Workspace {
        id, description, ..
    } = workspace;
    let title = id.to_string();
    let admin_href = format!("/workspaces/{id}");

    let stats = LocalResource::new(move || {
        let id = id.clone();
        async move { api::fetch_stats_overview(&id).await }
    });

    let navigate = use_navigate();
    let open_create = move |_| navigate("/create", NavigateOptions::default());

    view! {
        <div class="card workspace-item">
            <header>
                <h2>{title}</h2>
                {show_admin_badge.then(|| view! {
                    <span class="badge badge-admin">{i18n.get("administrator")}</span>
                })}
            </header>
            <p class="description">{description}</p>
            <div class="stats">
                {move || {
                    let fetched = stats.read();
                    let fetched = fetched.as_ref();
                    view! {
                        <StatCard
                            label=i18n.get("documents")
                            marker="documents-count"
                            value=region_count(fetched, |s| s.documents)
                        />
                        <StatCard
                            label=i18n.get("parts")
                            marker="parts-count"
                            value=region_count(fetched, |s| s.parts)
                        />
                        <StatCard
                            label=i18n.get("users")
                            marker="users-count"
                            value=region_count(fetched, |s| s.users)
                        />
                        <StatCard
                            label=i18n.get("products")
                            marker="products-count"
                            value=region_count(fetched, |s| s.products)
                        />
                    }
                }}
            </div>
            <footer>
                {administrated.then(|| view! {
                    <A href=admin_href>{i18n.get("administration")}</A>
                })}
                <button class="new-workspace" on:click=open_create>
                    {i18n.get("new-workspace")}
                </button>
            </footer>
        </div>
    }
}
