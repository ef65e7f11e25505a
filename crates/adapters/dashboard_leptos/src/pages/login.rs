use leptos::prelude::*;
use leptos_router::components::A;

/// Where unauthenticated visitors land. Signing in happens in the school
/// portal, which stores the role this dashboard reads.
#[component]
pub fn Login() -> impl IntoView {
    view! {
        <section class="card">
            <h1>"Signed out"</h1>
            <p>"Sign in through the school portal to open your dashboard."</p>
            <A href="/">"Back to dashboard"</A>
        </section>
    }
}
