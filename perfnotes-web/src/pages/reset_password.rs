use shared::models::ForceResetRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::api::ApiClient;
use crate::routes::MainRoute;
use crate::session::{self, Session};

/// Forced password reset screen. Reached after a login outcome of
/// `ForceReset`, which persisted only a token: the session is still
/// unauthenticated, so this page is deliberately not behind the route guard.
#[function_component(ResetPasswordPage)]
pub fn reset_password_page() -> Html {
    let new_password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);
    let navigator = use_navigator();
    let (session_state, dispatch) = use_store::<Session>();

    // Without a reset token there is nothing to do here.
    if !session_state.loading && session_state.token.is_none() {
        return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
    }

    let onsubmit = {
        let new_password = new_password.clone();
        let error_handle = error.clone();
        let busy_handle = busy.clone();
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();
        let token = session_state.token.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(token) = token.clone() else {
                return;
            };
            let password_value = (*new_password).clone();
            busy_handle.set(true);
            error_handle.set(None);
            let error_ref = error_handle.clone();
            let busy_ref = busy_handle.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let request = ForceResetRequest {
                    new_password: password_value,
                };
                match ApiClient::shared()
                    .force_reset_password(&token, &request)
                    .await
                {
                    Ok(()) => {
                        // The reset token is single-purpose; clear it and
                        // sign in again with the new password.
                        if let Some(ref navigator) = navigator {
                            session::logout(&dispatch, navigator);
                        }
                    }
                    Err(_) => {
                        error_ref.set(Some("Failed to reset password".to_string()));
                    }
                }
                busy_ref.set(false);
            });
        })
    };

    let on_password_change = {
        let new_password = new_password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                new_password.set(input.value());
            }
        })
    };

    let disable_submit = (*new_password).is_empty() || *busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Set new password"}</h2>
                    <p class="text-base-content/70">
                        {"Your account requires a new password before continuing."}
                    </p>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="new-password">
                            <span class="label-text">{"New password"}</span>
                        </label>
                        <input
                            id="new-password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*new_password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if *busy { "Resetting..." } else { "Reset password" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
