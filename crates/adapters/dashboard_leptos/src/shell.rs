//! Dashboard shells and the role router in front of them.

use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};
use schooldesk_app::services::session_service::SessionService;
use schooldesk_domain::role::{AuthContext, Role, RoleRoute};

use crate::components::{Footer, Header, Sidebar};
use crate::pages::Unauthorized;
use crate::storage::BrowserSessionStore;

/// The auth context provided by the [`RoleRouter`], if any.
pub fn use_auth() -> Option<AuthContext> {
    use_context::<AuthContext>()
}

/// Reads the persisted role once and picks the shell for it.
///
/// The resulting [`AuthContext`] is provided to the whole shell subtree;
/// pages read it from context, never from storage.
#[component]
pub fn RoleRouter() -> impl IntoView {
    let auth = SessionService::new(BrowserSessionStore).auth_context();
    let route = RoleRoute::for_context(auth.as_ref());
    if let Some(auth) = auth {
        provide_context(auth);
    }

    match route {
        RoleRoute::AdminShell => view! { <DashboardShell role=Role::Admin/> }.into_any(),
        RoleRoute::TeacherShell => view! { <DashboardShell role=Role::Teacher/> }.into_any(),
        RoleRoute::Login => view! { <Redirect path="/login"/> }.into_any(),
    }
}

/// Sidebar, header, routed content and footer around the current page.
#[component]
pub fn DashboardShell(role: Role) -> impl IntoView {
    let (sidebar_open, set_sidebar_open) = signal(false);

    view! {
        <div class="layout">
            <Sidebar role=role open=sidebar_open set_open=set_sidebar_open/>
            <div class="content">
                <Header open=sidebar_open set_open=set_sidebar_open/>
                <main>
                    <Outlet/>
                </main>
                <Footer/>
            </div>
        </div>
    }
}

/// Renders `children` for admins and an access notice for everyone else.
#[component]
pub fn AdminOnly(children: Children) -> impl IntoView {
    let is_admin = use_auth().is_some_and(|auth| auth.role == Role::Admin);
    if is_admin {
        children().into_any()
    } else {
        view! { <Unauthorized/> }.into_any()
    }
}
