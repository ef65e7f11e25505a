use leptos::prelude::*;
use leptos_router::{
    components::{ParentRoute, Route, Router, Routes},
    path,
};

pub mod api;
mod components;
mod pages;
mod scope;
mod shell;
pub mod storage;

use components::ToastContainer;
use pages::{
    Classes, Courses, CreateResult, Login, Logout, NotFound, Overview, Results, Statistics,
    Students, Teachers,
};
use shell::{AdminOnly, RoleRouter};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ToastContainer>
            <Router>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("login") view=Login/>
                    <ParentRoute path=path!("") view=RoleRouter>
                        <Route path=path!("") view=Overview/>
                        <Route path=path!("students") view=|| view! { <AdminOnly><Students/></AdminOnly> }/>
                        <Route path=path!("classes") view=|| view! { <AdminOnly><Classes/></AdminOnly> }/>
                        <Route path=path!("courses") view=|| view! { <AdminOnly><Courses/></AdminOnly> }/>
                        <Route path=path!("teachers") view=|| view! { <AdminOnly><Teachers/></AdminOnly> }/>
                        <Route path=path!("results") view=|| view! { <AdminOnly><Results/></AdminOnly> }/>
                        <Route path=path!("results/new") view=|| view! { <AdminOnly><CreateResult/></AdminOnly> }/>
                        <Route path=path!("stats") view=Statistics/>
                        <Route path=path!("logout") view=Logout/>
                        <Route path=path!("*any") view=NotFound/>
                    </ParentRoute>
                </Routes>
            </Router>
        </ToastContainer>
    }
}
