use leptos::prelude::*;
use schooldesk_app::services::roster_service::RosterService;

use crate::api::HttpSchoolApi;
use crate::components::{ClassTable, Loading, use_toasts};
use crate::scope::use_cancel_token;

/// Classes page, one row per class and section.
#[component]
pub fn Classes() -> impl IntoView {
    let token = use_cancel_token();
    let toasts = use_toasts();

    let classes = LocalResource::new(move || {
        let token = token.clone();
        async move {
            RosterService::new(HttpSchoolApi::default())
                .classes(&token)
                .await
                .unwrap_or_else(|err| {
                    toasts.load_failed("classes", &err);
                    Vec::new()
                })
        }
    });

    view! {
        <div>
            <h1>"Classes"</h1>
            <Suspense fallback=move || view! { <Loading message="Loading classes\u{2026}"/> }>
                {move || classes.get().map(|list| view! { <ClassTable classes=list/> })}
            </Suspense>
        </div>
    }
}
