//! Workspace administration page: description, settings, and the same
//! membership statistics the overview card shows.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use plmhub_domain::id::WorkspaceId;
use plmhub_domain::time;

use crate::api;
use crate::components::{Loading, StatCard, region_count};
use crate::config::use_config;

/// Workspace detail page.
#[component]
pub fn WorkspaceDetail() -> impl IntoView {
    let i18n = use_config().i18n;
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();

    let workspace = LocalResource::new(move || {
        let raw = id();
        async move {
            let workspace_id = WorkspaceId::new(raw)?;
            api::fetch_workspace(&workspace_id).await
        }
    });

    let stats = LocalResource::new(move || {
        let raw = id();
        async move {
            let workspace_id = WorkspaceId::new(raw)?;
            api::fetch_stats_overview(&workspace_id).await
        }
    });

    view! {
        <div>
            <h1>{i18n.get("administration")}</h1>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    workspace.read().as_ref().map(|result| match result {
                        Ok(workspace) => {
                            let created = time::format_date(&workspace.created_at);
                            view! {
                                <div class="card">
                                    <h2>{workspace.id.to_string()}</h2>
                                    <p class="description">{workspace.description.clone()}</p>
                                    <p>
                                        <strong>{i18n.get("administrator")} ": "</strong>
                                        {workspace.admin.to_string()}
                                    </p>
                                    <p><strong>"Created: "</strong> {created}</p>
                                    {workspace.folder_locked.then(|| view! {
                                        <span class="badge badge-locked">
                                            {i18n.get("folder-locked")}
                                        </span>
                                    })}
                                </div>
                            }.into_any()
                        }
                        Err(err) => view! {
                            <p class="error">{"Failed to load workspace: "} {err.to_string()}</p>
                        }.into_any(),
                    })
                }}
            </Suspense>

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

            <p><A href="/">{"\u{2190} "} {i18n.get("back")}</A></p>
        </div>
    }
}
