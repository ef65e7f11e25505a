use leptos::prelude::*;
use schooldesk_app::services::roster_service::RosterService;

use crate::api::HttpSchoolApi;
use crate::components::{Loading, TeacherTable, use_toasts};
use crate::scope::use_cancel_token;

/// Teachers page.
#[component]
pub fn Teachers() -> impl IntoView {
    let token = use_cancel_token();
    let toasts = use_toasts();

    let teachers = LocalResource::new(move || {
        let token = token.clone();
        async move {
            RosterService::new(HttpSchoolApi::default())
                .teachers(&token)
                .await
                .unwrap_or_else(|err| {
                    toasts.load_failed("teachers", &err);
                    Vec::new()
                })
        }
    });

    view! {
        <div>
            <h1>"Teachers"</h1>
            <Suspense fallback=move || view! { <Loading message="Loading teachers\u{2026}"/> }>
                {move || teachers.get().map(|list| view! { <TeacherTable teachers=list/> })}
            </Suspense>
        </div>
    }
}
