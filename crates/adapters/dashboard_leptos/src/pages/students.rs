use leptos::prelude::*;
use schooldesk_app::services::roster_service::RosterService;

use crate::api::HttpSchoolApi;
use crate::components::{Loading, StudentTable, use_toasts};
use crate::scope::use_cancel_token;

/// Students page, sorted by registration number.
#[component]
pub fn Students() -> impl IntoView {
    let token = use_cancel_token();
    let toasts = use_toasts();

    let students = LocalResource::new(move || {
        let token = token.clone();
        async move {
            RosterService::new(HttpSchoolApi::default())
                .students(&token)
                .await
                .unwrap_or_else(|err| {
                    toasts.load_failed("students", &err);
                    Vec::new()
                })
        }
    });

    view! {
        <div>
            <h1>"Students"</h1>
            <Suspense fallback=move || view! { <Loading message="Loading students\u{2026}"/> }>
                {move || students.get().map(|list| view! { <StudentTable students=list/> })}
            </Suspense>
        </div>
    }
}
