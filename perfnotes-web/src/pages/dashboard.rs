use shared::models::Role;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::routes::MainRoute;
use crate::session::Session;

/// Dashboard page component. The route guard only renders this for an
/// authenticated, permitted session, so a missing user renders nothing.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let user = use_selector(|session: &Session| session.user.clone());
    let Some(user) = (*user).clone() else {
        return Html::default();
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{"Dashboard"}</h1>
            <p class="text-base-content/80">
                { format!("Welcome, {} ({})", user.name, user.role) }
            </p>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { role_cards(user.role) }
            </div>
        </div>
    }
}

/// Role-specific action cards. The match is exhaustive over the closed role
/// set so adding a role forces a decision here.
fn role_cards(role: Role) -> Html {
    match role {
        Role::Ceo => html! {
            <>
                { action_card(
                    "Employee notes",
                    "View and manage performance notes for all employees",
                    IconId::HeroiconsOutlineDocumentText,
                ) }
                { action_card(
                    "Company overview",
                    "Review notes across every team in one place",
                    IconId::HeroiconsOutlineDocument,
                ) }
            </>
        },
        Role::Manager => html! {
            { action_card(
                "Team notes",
                "Manage and view notes for your assigned team",
                IconId::HeroiconsOutlineDocumentText,
            ) }
        },
        Role::Hr => html! {
            { action_card(
                "Public notes",
                "Access performance notes visible to HR",
                IconId::HeroiconsOutlineDocumentText,
            ) }
        },
        Role::Admin => html! {
            { action_card(
                "User notes",
                "Review notes recorded across teams",
                IconId::HeroiconsOutlineCog6Tooth,
            ) }
        },
        Role::SuperAdmin => html! {
            <>
                { action_card(
                    "All notes",
                    "Full access to every performance note",
                    IconId::HeroiconsOutlineDocumentText,
                ) }
                { action_card(
                    "Administration",
                    "Everything the platform records, unrestricted",
                    IconId::HeroiconsOutlineCog6Tooth,
                ) }
            </>
        },
        // Employees do not reach the dashboard (the guard sends them to the
        // unauthorized screen), but the dispatch stays total.
        Role::Employee => html! {
            { action_card(
                "My notes",
                "Performance notes recorded about you",
                IconId::HeroiconsOutlineDocumentText,
            ) }
        },
    }
}

fn action_card(title: &'static str, description: &'static str, icon: IconId) -> Html {
    html! {
        <div class="card bg-base-200 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">
                    <Icon icon_id={icon} class="w-6 h-6" />
                    { title }
                </h2>
                <p>{ description }</p>
                <div class="card-actions justify-end">
                    <Link<MainRoute> to={MainRoute::Notes} classes="btn btn-primary">
                        {"View notes"}
                    </Link<MainRoute>>
                </div>
            </div>
        </div>
    }
}
