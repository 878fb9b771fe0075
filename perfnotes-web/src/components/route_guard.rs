//! Role-gated rendering of protected subtrees.

use shared::models::Role;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::loading::Loading;
use crate::routes::MainRoute;
use crate::session::Session;

/// Access decision derived from the current session.
///
/// ```text
/// Pending      loading
/// DeniedUnauth !loading && !authenticated
/// DeniedRole   !loading && authenticated && !permitted
/// Granted      !loading && authenticated && permitted
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Hydration has not finished; no decision yet, no navigation.
    Pending,
    /// No authenticated session; redirect to the login screen.
    DeniedUnauth,
    /// Authenticated, but the role is outside the required set; redirect to
    /// the unauthorized screen.
    DeniedRole,
    /// Render the protected content.
    Granted,
}

impl GuardState {
    /// Pure decision function, re-evaluated on every session change. The
    /// guard holds no state beyond what it reads here.
    #[must_use]
    pub fn evaluate(session: &Session, required_roles: &[Role]) -> Self {
        if session.loading {
            Self::Pending
        } else if !session.is_authenticated() {
            Self::DeniedUnauth
        } else if !session.has_permission(required_roles) {
            Self::DeniedRole
        } else {
            Self::Granted
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    /// Roles permitted to view the guarded content.
    pub required_roles: Vec<Role>,
    pub children: Children,
}

/// Gates a subtree behind authentication and role checks.
///
/// Subscribes to the session store and re-evaluates the decision on every
/// change, so a logout from a nested component retracts the content. The
/// redirect effect is keyed on the decision itself: navigation fires at most
/// once per transition into a denied state, never in a loop.
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let session = use_store_value::<Session>();
    let navigator = use_navigator();
    let state = GuardState::evaluate(&session, &props.required_roles);

    use_effect_with(state, move |state| {
        if let Some(navigator) = navigator {
            match state {
                GuardState::DeniedUnauth => navigator.push(&MainRoute::Login),
                GuardState::DeniedRole => navigator.push(&MainRoute::Unauthorized),
                GuardState::Pending | GuardState::Granted => {}
            }
        }
        || ()
    });

    match state {
        GuardState::Pending => html! { <Loading /> },
        GuardState::DeniedUnauth | GuardState::DeniedRole => Html::default(),
        GuardState::Granted => html! { <>{ props.children.clone() }</> },
    }
}
