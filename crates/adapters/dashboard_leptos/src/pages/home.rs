//! Workspace overview page: one card per workspace of the viewer.

use leptos::prelude::*;
use plmhub_domain::account::Account;
use plmhub_domain::workspace::Workspace;

use crate::api::{self, ApiError};
use crate::components::{Loading, WorkspaceItemCard};
use crate::config::use_config;

/// Home page displaying every workspace the viewer is active in.
#[component]
pub fn Workspaces() -> impl IntoView {
    let i18n = use_config().i18n;

    let overview: LocalResource<Result<(Account, Vec<Workspace>), ApiError>> =
        LocalResource::new(|| async {
            let account = api::fetch_account().await?;
            let workspaces = api::fetch_workspaces().await?;
            Ok((account, workspaces))
        });

    view! {
        <div>
            <h1>{i18n.get("home")}</h1>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    overview.read().as_ref().map(|result| match result {
                        Ok((account, workspaces)) => {
                            if workspaces.is_empty() {
                                view! {
                                    <p class="hint">{i18n.get("empty")}</p>
                                }.into_any()
                            } else {
                                view! {
                                    <div class="workspace-grid">
                                        {workspaces.iter().map(|workspace| {
                                            let administrated = account.administrates(workspace);
                                            view! {
                                                <WorkspaceItemCard
                                                    workspace=workspace.clone()
                                                    administrated
                                                />
                                            }
                                        }).collect::<Vec<_>>()}
                                    </div>
                                }.into_any()
                            }
                        }
                        Err(err) => view! {
                            <p class="error">{"Failed to load workspaces: "} {err.to_string()}</p>
                        }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
