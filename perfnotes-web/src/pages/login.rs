use shared::models::QuickLoginUser;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::*;

use yew_router::prelude::Redirect;

use crate::api::ApiClient;
use crate::routes::{MainRoute, landing_route};
use crate::session::{self, LoginStatus, Session};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);
    let quick_users = use_state(Vec::<QuickLoginUser>::new);
    let navigator = use_navigator();
    let (session, dispatch) = use_store::<Session>();

    {
        let quick_users = quick_users.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                if let Ok(users) = ApiClient::shared().quick_login_users().await {
                    quick_users.set(users);
                }
            });
            || ()
        });
    }

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let busy_handle = busy.clone();
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email_value = (*email_handle).clone();
            let password_value = (*password_handle).clone();
            busy_handle.set(true);
            error_handle.set(None);
            let error_ref = error_handle.clone();
            let busy_ref = busy_handle.clone();
            let navigator_handle = navigator.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                match session::login(dispatch.clone(), email_value, password_value).await {
                    LoginStatus::Success => {
                        let role = dispatch.get().user.as_ref().map(|user| user.role);
                        if let (Some(nav), Some(role)) = (navigator_handle.as_ref(), role) {
                            nav.push(&landing_route(role));
                        }
                    }
                    LoginStatus::ForceReset => {
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::ResetPassword);
                        }
                    }
                    LoginStatus::Error => {
                        error_ref.set(Some("Invalid email or password".to_string()));
                    }
                }
                busy_ref.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    // Selecting a quick-login account only prefills the email field; the
    // password is still required.
    let on_quick_select = {
        let email = email.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                email.set(select.value());
            }
        })
    };

    // An already-authenticated visitor has nothing to do here.
    if !session.loading && session.is_authenticated() {
        if let Some(user) = session.user.as_ref() {
            return html! { <Redirect<MainRoute> to={landing_route(user.role)} /> };
        }
    }

    let is_busy = *busy;
    let disable_submit = (*email).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Performance Management System"}</h2>
                    <p class="text-base-content/70">{"Sign in"}</p>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    if !quick_users.is_empty() {
                        <div class="form-control">
                            <label class="label" for="quick-login">
                                <span class="label-text">{"Quick login as"}</span>
                            </label>
                            <select
                                id="quick-login"
                                class="select select-bordered"
                                onchange={on_quick_select}
                            >
                                <option value="" selected=true disabled=true>{"Choose an account"}</option>
                                {
                                    for quick_users.iter().map(|user| html! {
                                        <option value={user.email.clone()}>
                                            { format!("{} – {}", user.role, user.email) }
                                        </option>
                                    })
                                }
                            </select>
                        </div>
                    }
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
