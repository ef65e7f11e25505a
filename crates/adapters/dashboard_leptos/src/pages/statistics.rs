use leptos::prelude::*;
use schooldesk_app::services::stats_service::StatsService;
use schooldesk_domain::role::Role;
use schooldesk_domain::stats::StatPoint;

use crate::api::HttpSchoolApi;
use crate::components::{Loading, StatCharts};
use crate::scope::use_cancel_token;
use crate::shell::use_auth;

/// Charts over the signed-in role's counts. Any failed fetch shows zeros.
#[component]
pub fn Statistics() -> impl IntoView {
    let token = use_cancel_token();
    let auth = use_auth();
    let role = auth.as_ref().map_or(Role::Admin, |auth| auth.role);
    let teacher_id = auth.and_then(|auth| auth.teacher_id());

    let series = LocalResource::new(move || {
        let token = token.clone();
        let teacher_id = teacher_id.clone();
        async move {
            let stats = StatsService::new(HttpSchoolApi::default());
            match role {
                Role::Admin => stats.admin_stats_or_zero(&token).await.series(),
                Role::Teacher => stats
                    .teacher_stats_or_zero(teacher_id.as_ref(), &token)
                    .await
                    .series(),
            }
        }
    });

    view! {
        <div>
            <h1>"Statistics"</h1>
            <Suspense fallback=move || view! { <Loading message="Loading statistics\u{2026}"/> }>
                {move || series.get().map(|series: Vec<StatPoint>| view! { <StatCharts series=series/> })}
            </Suspense>
        </div>
    }
}
