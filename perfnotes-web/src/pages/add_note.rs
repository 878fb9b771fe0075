use shared::models::{CreateNoteRequest, Employee, NoteType};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::api::{self, ApiClient};
use crate::routes::MainRoute;
use crate::session::{self, Session};

/// Note-recording form for managing roles. The employee dropdown defaults to
/// the first employee the backend returns, mirroring the filter dropdown on
/// the notes view.
#[function_component(AddNotePage)]
pub fn add_note_page() -> Html {
    let (session_state, dispatch) = use_store::<Session>();
    let navigator = use_navigator();
    let employees = use_state(Vec::<Employee>::new);
    let employee_id = use_state(|| None::<i64>);
    let note_type = use_state(|| NoteType::Neutral);
    let body = use_state(String::new);
    let saved = use_state(|| false);
    let error = use_state(|| None::<String>);

    {
        let employees = employees.clone();
        let employee_id = employee_id.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        use_effect_with(session_state.token.clone(), move |token| {
            if let Some(token) = token.clone() {
                spawn_local(async move {
                    match ApiClient::shared().list_employees(&token).await {
                        Ok(list) => {
                            employee_id.set(list.first().map(|employee| employee.id));
                            employees.set(list);
                        }
                        Err(err) if api::is_unauthorized(&err) => {
                            if let Some(ref navigator) = navigator {
                                session::logout(&dispatch, navigator);
                            }
                        }
                        Err(_) => {}
                    }
                });
            }
            || ()
        });
    }

    let on_employee_change = {
        let employee_id = employee_id.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                employee_id.set(select.value().parse().ok());
            }
        })
    };

    let on_type_change = {
        let note_type = note_type.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(parsed) = select.value().parse() {
                    note_type.set(parsed);
                }
            }
        })
    };

    let on_body_input = {
        let body = body.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                body.set(area.value());
            }
        })
    };

    let onsubmit = {
        let session_token = session_state.token.clone();
        let employee_id_handle = employee_id.clone();
        let note_type_handle = note_type.clone();
        let body_handle = body.clone();
        let saved_handle = saved.clone();
        let error_handle = error.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let (Some(token), Some(employee_id)) = (session_token.clone(), *employee_id_handle)
            else {
                return;
            };
            let payload = CreateNoteRequest {
                employee_id,
                note: (*body_handle).clone(),
                note_type: *note_type_handle,
            };
            saved_handle.set(false);
            error_handle.set(None);
            let body_ref = body_handle.clone();
            let saved_ref = saved_handle.clone();
            let error_ref = error_handle.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match ApiClient::shared().create_note(&token, &payload).await {
                    Ok(()) => {
                        body_ref.set(String::new());
                        saved_ref.set(true);
                    }
                    Err(err) if api::is_unauthorized(&err) => {
                        if let Some(ref navigator) = navigator {
                            session::logout(&dispatch, navigator);
                        }
                    }
                    Err(_) => {
                        error_ref.set(Some("Failed to add note".to_string()));
                    }
                }
            });
        })
    };

    let disable_submit = body.is_empty() || employee_id.is_none();

    html! {
        <div class="p-4 space-y-6 max-w-xl">
            <h1 class="text-2xl font-bold">{"Add performance note"}</h1>

            if *saved {
                <div class="alert alert-success">
                    <span>{"Note added"}</span>
                </div>
            }
            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <span>{message.clone()}</span>
                </div>
            }

            <form class="space-y-4" onsubmit={onsubmit}>
                <div class="form-control">
                    <label class="label" for="employee">
                        <span class="label-text">{"Employee"}</span>
                    </label>
                    <select id="employee" class="select select-bordered" onchange={on_employee_change}>
                        {
                            for employees.iter().map(|employee| html! {
                                <option
                                    value={employee.id.to_string()}
                                    selected={Some(employee.id) == *employee_id}
                                >
                                    { employee.name.clone() }
                                </option>
                            })
                        }
                    </select>
                </div>

                <div class="form-control">
                    <label class="label" for="note-body">
                        <span class="label-text">{"Performance note"}</span>
                    </label>
                    <textarea
                        id="note-body"
                        class="textarea textarea-bordered"
                        rows="6"
                        value={(*body).clone()}
                        oninput={on_body_input}
                    />
                </div>

                <div class="form-control">
                    <label class="label" for="note-type">
                        <span class="label-text">{"Type"}</span>
                    </label>
                    <select id="note-type" class="select select-bordered" onchange={on_type_change}>
                        <option value="positive" selected={*note_type == NoteType::Positive}>{"Positive"}</option>
                        <option value="negative" selected={*note_type == NoteType::Negative}>{"Negative"}</option>
                        <option value="neutral" selected={*note_type == NoteType::Neutral}>{"Neutral"}</option>
                    </select>
                </div>

                <div class="flex gap-2">
                    <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                        {"Add note"}
                    </button>
                    <Link<MainRoute> to={MainRoute::Notes} classes="btn btn-ghost">
                        {"Back to notes"}
                    </Link<MainRoute>>
                </div>
            </form>
        </div>
    }
}
