use shared::models::{AdminUser, AssignRoleRequest, Role};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::api::{self, ApiClient};
use crate::session::{self, Session};

/// User management screen for administrators: the account list plus a role
/// assignment form. Account creation and deletion stay on the backend's
/// admin tooling.
#[function_component(AdminUsersPage)]
pub fn admin_users_page() -> Html {
    let (session_state, dispatch) = use_store::<Session>();
    let navigator = use_navigator();
    let users = use_state(Vec::<AdminUser>::new);
    let selected_user = use_state(|| None::<i64>);
    let selected_role = use_state(|| None::<Role>);
    let error = use_state(|| None::<String>);
    // Bumped after a successful role change to refetch the list.
    let generation = use_state(|| 0u32);

    {
        let users = users.clone();
        let error = error.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        use_effect_with(
            (session_state.token.clone(), *generation),
            move |(token, _)| {
                if let Some(token) = token.clone() {
                    spawn_local(async move {
                        match ApiClient::shared().list_users(&token).await {
                            Ok(list) => users.set(list),
                            Err(err) if api::is_unauthorized(&err) => {
                                if let Some(ref navigator) = navigator {
                                    session::logout(&dispatch, navigator);
                                }
                            }
                            Err(_) => {
                                error.set(Some("Failed to load users".to_string()));
                            }
                        }
                    });
                }
                || ()
            },
        );
    }

    let on_user_change = {
        let selected_user = selected_user.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                selected_user.set(select.value().parse().ok());
            }
        })
    };

    let on_role_change = {
        let selected_role = selected_role.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                selected_role.set(select.value().parse().ok());
            }
        })
    };

    let on_assign = {
        let session_token = session_state.token.clone();
        let selected_user_handle = selected_user.clone();
        let selected_role_handle = selected_role.clone();
        let generation_handle = generation.clone();
        let error_handle = error.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let (Some(token), Some(user_id), Some(role)) = (
                session_token.clone(),
                *selected_user_handle,
                *selected_role_handle,
            ) else {
                return;
            };
            error_handle.set(None);
            let selected_user_ref = selected_user_handle.clone();
            let generation_ref = generation_handle.clone();
            let error_ref = error_handle.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let payload = AssignRoleRequest { role };
                match ApiClient::shared()
                    .assign_role(&token, user_id, &payload)
                    .await
                {
                    Ok(()) => {
                        selected_user_ref.set(None);
                        generation_ref.set(generation_ref.wrapping_add(1));
                    }
                    Err(err) if api::is_unauthorized(&err) => {
                        if let Some(ref navigator) = navigator {
                            session::logout(&dispatch, navigator);
                        }
                    }
                    Err(_) => {
                        error_ref.set(Some("Failed to assign role".to_string()));
                    }
                }
            });
        })
    };

    let disable_assign = selected_user.is_none() || selected_role.is_none();

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{"User management"}</h1>

            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <span>{message.clone()}</span>
                </div>
            }

            <form class="flex flex-wrap gap-4 items-end" onsubmit={on_assign}>
                <div class="form-control">
                    <label class="label" for="assign-user">
                        <span class="label-text">{"User"}</span>
                    </label>
                    <select id="assign-user" class="select select-bordered" onchange={on_user_change}>
                        <option value="" selected={selected_user.is_none()}>{"Select user"}</option>
                        {
                            for users.iter().map(|user| html! {
                                <option
                                    value={user.id.to_string()}
                                    selected={Some(user.id) == *selected_user}
                                >
                                    { user.email.clone() }
                                </option>
                            })
                        }
                    </select>
                </div>
                <div class="form-control">
                    <label class="label" for="assign-role">
                        <span class="label-text">{"Role"}</span>
                    </label>
                    <select id="assign-role" class="select select-bordered" onchange={on_role_change}>
                        <option value="" selected={selected_role.is_none()}>{"Select role"}</option>
                        {
                            for Role::ALL.iter().map(|role| html! {
                                <option
                                    value={role.as_str()}
                                    selected={Some(*role) == *selected_role}
                                >
                                    { role.to_string() }
                                </option>
                            })
                        }
                    </select>
                </div>
                <button class="btn btn-primary" type="submit" disabled={disable_assign}>
                    {"Assign role"}
                </button>
            </form>

            if users.is_empty() {
                <p class="text-base-content/60">{"No users to show."}</p>
            } else {
                <div class="space-y-2">
                    {
                        for users.iter().map(|user| html! {
                            <div class="border rounded p-3 flex justify-between items-center" key={user.id}>
                                <span class="font-semibold">{ user.email.clone() }</span>
                                <span class="badge badge-outline">{ user.role.to_string() }</span>
                            </div>
                        })
                    }
                </div>
            }
        </div>
    }
}
