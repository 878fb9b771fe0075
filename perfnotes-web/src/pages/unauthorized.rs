use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::session::{self, Session};

/// Access-denied screen reached when an authenticated user's role is
/// outside a guarded route's required set.
#[function_component(UnauthorizedPage)]
pub fn unauthorized_page() -> Html {
    let navigator = use_navigator();
    let (_session, dispatch) = use_store::<Session>();

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(ref navigator) = navigator {
                navigator.back();
            }
        })
    };

    let on_logout = Callback::from(move |_: MouseEvent| {
        if let Some(ref navigator) = navigator {
            session::logout(&dispatch, navigator);
        }
    });

    html! {
        <div class="flex flex-col items-center justify-center min-h-screen bg-base-200 gap-4">
            <h1 class="text-3xl font-bold">{"Access Denied"}</h1>
            <p class="max-w-md text-center text-base-content/70">
                {"You do not have permission to access this page. Please contact your administrator if you believe this is an error."}
            </p>
            <div class="flex gap-2">
                <button class="btn btn-outline" onclick={on_back}>{"Go back"}</button>
                <button class="btn btn-primary" onclick={on_logout}>{"Logout"}</button>
            </div>
        </div>
    }
}
