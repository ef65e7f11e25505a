use leptos::prelude::*;

/// Shown when a teacher opens an admin-only page.
#[component]
pub fn Unauthorized() -> impl IntoView {
    view! {
        <div>
            <h1>"Not allowed"</h1>
            <p class="error">"This page is only available to administrators."</p>
        </div>
    }
}
