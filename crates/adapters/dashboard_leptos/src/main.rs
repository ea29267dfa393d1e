use adapter_dashboard_leptos::App;
use leptos::prelude::*;

fn main() {
    leptos::mount::mount_to_body(|| view! { <App/> });
}
