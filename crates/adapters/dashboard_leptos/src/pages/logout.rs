use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use schooldesk_app::services::session_service::{logout, logout_notice};

use crate::api::HttpSchoolApi;
use crate::components::use_toasts;
use crate::scope::use_cancel_token;

/// Logout confirmation.
#[component]
pub fn Logout() -> impl IntoView {
    let token = use_cancel_token();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let (pending, set_pending) = signal(false);

    let on_logout = move |_| {
        let token = token.clone();
        let navigate = navigate.clone();
        set_pending.set(true);
        spawn_local(async move {
            let outcome = logout(&HttpSchoolApi::default(), &token).await;
            if let Some(notice) = logout_notice(&outcome) {
                toasts.push(notice);
            }
            set_pending.try_set(false);
            if matches!(outcome, Ok(true)) {
                navigate("/login", NavigateOptions::default());
            }
        });
    };

    view! {
        <section class="card logout">
            <h1>"Logout"</h1>
            <p>"Are you sure you want to log out?"</p>
            <p>"You will be signed out from your current session and redirected to the login page."</p>
            <button class="btn btn-danger" disabled=move || pending.get() on:click=on_logout>
                "Logout"
            </button>
            <A href="/">"Cancel"</A>
        </section>
    }
}
