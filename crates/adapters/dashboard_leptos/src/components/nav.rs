//! Side navigation for the dashboard shells.

use leptos::prelude::*;
use leptos_router::components::A;
use schooldesk_domain::role::Role;

const ADMIN_LINKS: &[(&str, &str)] = &[
    ("/", "Overview"),
    ("/students", "Students"),
    ("/classes", "Classes"),
    ("/courses", "Courses"),
    ("/teachers", "Teachers"),
    ("/results", "Results"),
    ("/results/new", "Create Result"),
    ("/stats", "Statistics"),
    ("/logout", "Logout"),
];

const TEACHER_LINKS: &[(&str, &str)] = &[
    ("/", "Overview"),
    ("/stats", "Statistics"),
    ("/logout", "Logout"),
];

fn links_for(role: Role) -> &'static [(&'static str, &'static str)] {
    match role {
        Role::Admin => ADMIN_LINKS,
        Role::Teacher => TEACHER_LINKS,
    }
}

/// Sidebar with the links available to `role`. Following a link closes it
/// on small screens.
#[component]
pub fn Sidebar(role: Role, open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    view! {
        <aside id="sidebar" class=move || if open.get() { "sidebar open" } else { "sidebar" }>
            <h2>"SchoolDesk"</h2>
            <nav>
                <ul>
                    {links_for(role)
                        .iter()
                        .map(|&(href, label)| {
                            view! {
                                <li on:click=move |_| set_open.set(false)>
                                    <A href=href exact=true>{label}</A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </aside>
    }
}
