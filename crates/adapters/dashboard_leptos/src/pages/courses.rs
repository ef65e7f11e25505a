use leptos::prelude::*;
use schooldesk_app::services::roster_service::RosterService;

use crate::api::HttpSchoolApi;
use crate::components::{CourseTable, Loading, use_toasts};
use crate::scope::use_cancel_token;

#[component]
pub fn Courses() -> impl IntoView {
    let token = use_cancel_token();
    let toasts = use_toasts();

    let courses = LocalResource::new(move || {
        let token = token.clone();
        async move {
            RosterService::new(HttpSchoolApi::default())
                .courses(&token)
                .await
                .unwrap_or_else(|err| {
                    toasts.load_failed("courses", &err);
                    Vec::new()
                })
        }
    });

    view! {
        <div>
            <h1>"Courses"</h1>
            <Suspense fallback=move || view! { <Loading message="Loading courses\u{2026}"/> }>
                {move || courses.get().map(|list| view! { <CourseTable courses=list/> })}
            </Suspense>
        </div>
    }
}
