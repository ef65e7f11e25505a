//! Landing page of each dashboard shell.

use leptos::prelude::*;
use schooldesk_app::services::roster_service::RosterService;
use schooldesk_app::services::stats_service::StatsService;
use schooldesk_domain::role::Role;
use schooldesk_domain::time::format_long_datetime;

use crate::api::HttpSchoolApi;
use crate::components::{Loading, StatCards, StatCharts};
use crate::scope::use_cancel_token;
use crate::shell::use_auth;

/// Greeting with the admin's name and the local date.
#[component]
fn AdminGreeting() -> impl IntoView {
    let token = use_cancel_token();
    let today = format_long_datetime(chrono::Local::now().naive_local());

    let admin = LocalResource::new(move || {
        let token = token.clone();
        async move {
            RosterService::new(HttpSchoolApi::default())
                .admin_profile(&token)
                .await
                .unwrap_or_else(|err| {
                    if !err.is_cancelled() {
                        leptos::logging::warn!("failed to fetch admin data: {err}");
                    }
                    None
                })
        }
    });

    let name = move || {
        admin
            .get()
            .flatten()
            .map_or_else(|| "Loading...".to_string(), |admin| admin.name)
    };

    view! {
        <div class="card greeting">
            <h1>"Good morning! " {name}</h1>
            <p>{today}</p>
        </div>
    }
}

#[component]
fn AdminOverview() -> impl IntoView {
    let token = use_cancel_token();
    let stats = LocalResource::new(move || {
        let token = token.clone();
        async move {
            StatsService::new(HttpSchoolApi::default())
                .admin_stats_or_zero(&token)
                .await
        }
    });

    view! {
        <div>
            <AdminGreeting/>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || stats.get().map(|stats| view! { <StatCards series=stats.series()/> })}
            </Suspense>
        </div>
    }
}

#[component]
fn TeacherOverview() -> impl IntoView {
    let token = use_cancel_token();
    let auth = use_auth();
    let name = auth
        .as_ref()
        .and_then(|auth| auth.display_name().map(str::to_string))
        .unwrap_or_else(|| "Teacher".to_string());
    let teacher_id = auth.and_then(|auth| auth.teacher_id());

    let stats = LocalResource::new(move || {
        let token = token.clone();
        let teacher_id = teacher_id.clone();
        async move {
            StatsService::new(HttpSchoolApi::default())
                .teacher_stats_or_zero(teacher_id.as_ref(), &token)
                .await
        }
    });

    view! {
        <div>
            <div class="card greeting">
                <h1>"Welcome, " {name}</h1>
            </div>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    stats
                        .get()
                        .map(|stats| {
                            view! {
                                <StatCards series=stats.series()/>
                                <StatCharts series=stats.series()/>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Admin or teacher overview, depending on who is signed in.
#[component]
pub fn Overview() -> impl IntoView {
    match use_auth().map(|auth| auth.role) {
        Some(Role::Teacher) => view! { <TeacherOverview/> }.into_any(),
        _ => view! { <AdminOverview/> }.into_any(),
    }
}
