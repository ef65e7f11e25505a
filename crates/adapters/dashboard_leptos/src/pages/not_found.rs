use leptos::prelude::*;
use leptos_router::components::A;

/// Fallback for any path without a page.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="card">
            <h1>"404"</h1>
            <p>"Nothing lives at this address."</p>
            <A href="/">"Back to the overview"</A>
        </section>
    }
}
