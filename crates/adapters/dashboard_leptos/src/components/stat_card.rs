//! Stat card component for displaying a labelled count.

use leptos::prelude::*;
use schooldesk_domain::stats::StatPoint;

/// A card displaying a label and a count.
#[component]
pub fn StatCard(point: StatPoint) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">{point.label}</span>
            <span class="stat-value">{point.value}</span>
        </div>
    }
}

/// One card per point, in series order.
#[component]
pub fn StatCards(series: Vec<StatPoint>) -> impl IntoView {
    view! {
        <div class="stat-grid">
            {series.into_iter().map(|point| view! { <StatCard point=point/> }).collect_view()}
        </div>
    }
}
