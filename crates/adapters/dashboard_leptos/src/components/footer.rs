use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"SchoolDesk \u{00B7} school administration dashboard"</p>
        </footer>
    }
}
