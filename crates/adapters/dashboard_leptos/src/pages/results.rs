use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use schooldesk_app::services::results_service::{ResultsService, apply_delete};
use schooldesk_domain::id::ResultId;

use crate::api::HttpSchoolApi;
use crate::components::{Loading, ResultTable, use_toasts};
use crate::scope::use_cancel_token;

/// Results board: every recorded result with delete actions.
#[component]
pub fn Results() -> impl IntoView {
    let token = use_cancel_token();
    let toasts = use_toasts();
    let results = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(true);
    let (busy, set_busy) = signal(false);

    {
        let token = token.clone();
        spawn_local(async move {
            match ResultsService::new(HttpSchoolApi::default()).load(&token).await {
                Ok(rows) => {
                    results.try_set(rows);
                }
                Err(err) => toasts.load_failed("results", &err),
            }
            set_loading.try_set(false);
        });
    }

    let on_delete = Callback::new(move |id: ResultId| {
        let token = token.clone();
        set_busy.set(true);
        spawn_local(async move {
            let outcome = ResultsService::new(HttpSchoolApi::default())
                .delete(&id, &token)
                .await;
            if let Some(notice) = results
                .try_update(|rows| apply_delete(rows, &id, &outcome))
                .flatten()
            {
                toasts.push(notice);
            }
            set_busy.try_set(false);
        });
    });

    view! {
        <div>
            <div class="page-heading">
                <div>
                    <h1>"Results"</h1>
                    <p>"Manage all student results or add new results"</p>
                </div>
                <A href="/results/new">"Add New Result"</A>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <Loading message="Loading results\u{2026}"/> }>
                <Show when=move || busy.get()>
                    <Loading message="Deleting result\u{2026}" inline=true/>
                </Show>
                <ResultTable results=results busy=busy on_delete=on_delete/>
            </Show>
        </div>
    }
}
