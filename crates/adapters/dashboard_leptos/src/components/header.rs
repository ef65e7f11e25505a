use leptos::prelude::*;

use crate::shell::use_auth;

/// Top bar with the sidebar toggle and the signed-in user's name.
#[component]
pub fn Header(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let name = use_auth()
        .and_then(|auth| auth.display_name().map(str::to_string))
        .unwrap_or_default();

    view! {
        <header class="header">
            <button
                class="btn btn-secondary"
                aria-controls="sidebar"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|open| *open = !*open)
            >
                "\u{2630}"
            </button>
            <span class="header-user">{name}</span>
        </header>
    }
}
