//! Workspace creation form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use plmhub_domain::id::WorkspaceId;

use crate::api::{self, CreateWorkspaceRequest};
use crate::components::use_toasts;
use crate::config::use_config;

/// Form page creating a new workspace on submit.
///
/// The id is validated client-side before anything is sent; a rejected
/// creation (e.g. the id is already taken) surfaces the server's message
/// as an error notice.
#[component]
pub fn WorkspaceCreate() -> impl IntoView {
    let i18n = use_config().i18n;
    let toasts = use_toasts();
    let navigate = use_navigate();

    let (id, set_id) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (folder_locked, set_folder_locked) = signal(false);
    let (submitting, set_submitting) = signal(false);

    let submit = move |_| {
        let workspace_id = match WorkspaceId::new(id.get_untracked()) {
            Ok(workspace_id) => workspace_id,
            Err(err) => {
                toasts.push_error(err.to_string());
                return;
            }
        };
        let request = CreateWorkspaceRequest {
            id: workspace_id.to_string(),
            description: description.get_untracked(),
            folder_locked: folder_locked.get_untracked(),
        };
        set_submitting.set(true);

        let toasts = toasts.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_workspace(&request).await {
                Ok(workspace) => {
                    leptos::logging::log!("created workspace {}", workspace.id);
                    navigate("/", NavigateOptions::default());
                }
                Err(err) => {
                    toasts.push_error(format!("Failed to create workspace: {err}"));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="workspace-create">
            <h1>{i18n.get("create-workspace")}</h1>
            <form on:submit=move |ev| ev.prevent_default()>
                <label>
                    {i18n.get("workspace-id")}
                    <input
                        type="text"
                        prop:value=id
                        on:input=move |ev| set_id.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    {i18n.get("description")}
                    <textarea
                        prop:value=description
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=folder_locked
                        on:change=move |ev| set_folder_locked.set(event_target_checked(&ev))
                    />
                    {i18n.get("folder-locked")}
                </label>
                <button disabled=move || submitting.get() on:click=submit>
                    {i18n.get("create")}
                </button>
            </form>
        </div>
    }
}
