use shared::models::Role;
use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::RouteGuard;
use crate::containers::layout::Layout;
use crate::pages::{
    AddNotePage, AdminUsersPage, DashboardPage, ErrorPage, LoginPage, NotesPage,
    ResetPasswordPage, UnauthorizedPage,
};

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/notes")]
    Notes,
    #[at("/notes/new")]
    AddNote,
    #[at("/admin/users")]
    AdminUsers,
    #[at("/reset-password")]
    ResetPassword,
    #[at("/unauthorized")]
    Unauthorized,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Roles allowed on the dashboard. Employees get their notes view only.
fn dashboard_roles() -> Vec<Role> {
    vec![
        Role::Ceo,
        Role::Manager,
        Role::Hr,
        Role::Admin,
        Role::SuperAdmin,
    ]
}

/// Roles allowed to record notes about employees.
pub fn note_author_roles() -> Vec<Role> {
    vec![Role::Manager, Role::SuperAdmin, Role::Ceo]
}

/// Roles allowed on the user management screen.
fn admin_roles() -> Vec<Role> {
    vec![Role::Admin, Role::SuperAdmin]
}

/// Where a fresh login lands. Admins go straight to user management; every
/// other role starts on the dashboard.
#[must_use]
pub fn landing_route(role: Role) -> MainRoute {
    match role {
        Role::Admin => MainRoute::AdminUsers,
        _ => MainRoute::Dashboard,
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    web_sys::console::log_1(&format!("Switching to route: {route:?}").into());
    match route {
        MainRoute::Home => html! { <Redirect<MainRoute> to={MainRoute::Dashboard} /> },
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::ResetPassword => html! { <ResetPasswordPage /> },
        MainRoute::Unauthorized => html! { <UnauthorizedPage /> },
        MainRoute::Dashboard => html! {
            <RouteGuard required_roles={dashboard_roles()}>
                <Layout>
                    <DashboardPage />
                </Layout>
            </RouteGuard>
        },
        MainRoute::Notes => html! {
            <RouteGuard required_roles={Role::ALL.to_vec()}>
                <Layout>
                    <NotesPage />
                </Layout>
            </RouteGuard>
        },
        MainRoute::AddNote => html! {
            <RouteGuard required_roles={note_author_roles()}>
                <Layout>
                    <AddNotePage />
                </Layout>
            </RouteGuard>
        },
        MainRoute::AdminUsers => html! {
            <RouteGuard required_roles={admin_roles()}>
                <Layout>
                    <AdminUsersPage />
                </Layout>
            </RouteGuard>
        },
        MainRoute::NotFound => html! {
            <Layout>
                <ErrorPage />
            </Layout>
        },
    }
}
