use leptos::prelude::*;

/// Spinner shown while a view waits on the backend.
///
/// `inline` renders a small spinner inside running text (pending deletes),
/// otherwise it fills the content area in place of a table or form.
#[component]
pub fn Loading(
    #[prop(default = "Loading\u{2026}".into(), into)] message: String,
    #[prop(optional)] inline: bool,
) -> impl IntoView {
    let class = if inline { "loading loading-inline" } else { "loading" };

    view! {
        <div class=class role="status" aria-live="polite">
            <span class="spinner"></span>
            <span>{message}</span>
        </div>
    }
}
