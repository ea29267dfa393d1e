//! Transient notices for surfacing asynchronous outcomes.

use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a notice stays on screen, in milliseconds.
const DISMISS_AFTER_MS: u32 = 5_000;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
}

impl ToastLevel {
    fn css_class(self) -> &'static str {
        match self {
            Self::Info => "toast-info",
            Self::Error => "toast-error",
        }
    }
}

/// A single notice.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Unique id for keyed rendering.
    pub id: u32,
    pub level: ToastLevel,
    pub text: String,
}

/// Reactive handle for pushing and dismissing notices.
#[derive(Clone)]
pub struct Toasts {
    set_toasts: WriteSignal<Vec<Toast>>,
    next_id: ReadSignal<u32>,
    set_next_id: WriteSignal<u32>,
}

impl Toasts {
    /// Push a notice. It auto-dismisses after five seconds.
    pub fn push(&self, level: ToastLevel, text: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.set_next_id.set(id + 1);

        let text = text.into();
        self.set_toasts.update(|list| {
            list.push(Toast { id, level, text });
        });

        let set_toasts = self.set_toasts;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
            set_toasts.update(|list| {
                list.retain(|toast| toast.id != id);
            });
        });
    }

    /// Push an informational notice.
    pub fn push_info(&self, text: impl Into<String>) {
        self.push(ToastLevel::Info, text);
    }

    /// Push an error notice.
    pub fn push_error(&self, text: impl Into<String>) {
        self.push(ToastLevel::Error, text);
    }

    /// Dismiss a notice immediately by id.
    pub fn dismiss(&self, id: u32) {
        self.set_toasts.update(|list| {
            list.retain(|toast| toast.id != id);
        });
    }
}

/// Access the notice handle from Leptos context.
///
/// Must be called within a component tree that has a [`ToastContainer`]
/// ancestor.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().expect("Toasts not found in context")
}

/// Container component that provides the notice context and renders the
/// active notices.
///
/// Place this once near the root of the component tree.
#[component]
pub fn ToastContainer(children: Children) -> impl IntoView {
    let (toasts, set_toasts) = signal(Vec::<Toast>::new());
    let (next_id, set_next_id) = signal(0_u32);

    let handle = Toasts {
        set_toasts,
        next_id,
        set_next_id,
    };

    provide_context(handle.clone());

    view! {
        {children()}
        <div class="toast-container">
            {move || {
                toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let handle = handle.clone();
                        view! {
                            <div class=format!("toast {}", toast.level.css_class())>
                                <button class="toast-dismiss" on:click=move |_| handle.dismiss(id)>
                                    "\u{00D7}"
                                </button>
                                {toast.text}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
