use shared::models::{Employee, Note, NoteFilter, NoteType};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::navigator::Navigator;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::api::{self, ApiClient};
use crate::routes::{MainRoute, note_author_roles};
use crate::session::{self, Session};

/// One parameterized notes view serving every role. The backend scopes the
/// note list to the caller's role; filtering here is client-side cosmetics
/// over the fetched list.
#[function_component(NotesPage)]
pub fn notes_page() -> Html {
    let (session_state, dispatch) = use_store::<Session>();
    let navigator = use_navigator();
    let notes = use_state(Vec::<Note>::new);
    let employees = use_state(Vec::<Employee>::new);
    let years = use_state(Vec::<i32>::new);
    let filter = use_state(NoteFilter::default);
    let error = use_state(|| None::<String>);

    {
        let notes = notes.clone();
        let employees = employees.clone();
        let years = years.clone();
        let error = error.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        use_effect_with(session_state.token.clone(), move |token| {
            if let Some(token) = token.clone() {
                spawn_local(async move {
                    let client = ApiClient::shared();
                    match client.list_notes(&token).await {
                        Ok(list) => notes.set(list),
                        Err(err) if api::is_unauthorized(&err) => {
                            // Stale token: force re-authentication.
                            force_relogin(&dispatch, navigator.as_ref());
                            return;
                        }
                        Err(_) => {
                            error.set(Some("Failed to load notes".to_string()));
                            return;
                        }
                    }
                    // The filter dropdowns are cosmetic, so their transport
                    // failures stay silent, but a 401 is still a stale token.
                    match client.list_employees(&token).await {
                        Ok(list) => employees.set(list),
                        Err(err) if api::is_unauthorized(&err) => {
                            force_relogin(&dispatch, navigator.as_ref());
                            return;
                        }
                        Err(_) => {}
                    }
                    match client.note_years(&token).await {
                        Ok(list) => years.set(list),
                        Err(err) if api::is_unauthorized(&err) => {
                            force_relogin(&dispatch, navigator.as_ref());
                        }
                        Err(_) => {}
                    }
                });
            }
            || ()
        });
    }

    let on_employee_change = {
        let filter = filter.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let mut next = (*filter).clone();
                next.employee_id = select.value().parse().ok();
                filter.set(next);
            }
        })
    };

    let on_year_change = {
        let filter = filter.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let mut next = (*filter).clone();
                next.year = select.value().parse().ok();
                filter.set(next);
            }
        })
    };

    let on_search_input = {
        let filter = filter.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*filter).clone();
                next.search = input.value();
                filter.set(next);
            }
        })
    };

    let visible = filter.apply(&notes);

    html! {
        <div class="p-4 space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{"Performance notes"}</h1>
                if session_state.has_permission(&note_author_roles()) {
                    <Link<MainRoute> to={MainRoute::AddNote} classes="btn btn-primary">
                        {"Add note"}
                    </Link<MainRoute>>
                }
            </div>

            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <span>{message.clone()}</span>
                </div>
            }

            <div class="flex flex-wrap gap-4">
                <select class="select select-bordered" onchange={on_employee_change}>
                    <option value="" selected=true>{"All employees"}</option>
                    {
                        for employees.iter().map(|employee| html! {
                            <option value={employee.id.to_string()}>{ employee.name.clone() }</option>
                        })
                    }
                </select>
                <select class="select select-bordered" onchange={on_year_change}>
                    <option value="" selected=true>{"All years"}</option>
                    {
                        for years.iter().map(|year| html! {
                            <option value={year.to_string()}>{ year.to_string() }</option>
                        })
                    }
                </select>
                <input
                    class="input input-bordered flex-grow"
                    type="search"
                    placeholder="Search notes..."
                    oninput={on_search_input}
                />
            </div>

            if visible.is_empty() {
                <p class="text-base-content/60">{"No notes match the current filters."}</p>
            } else {
                <div class="space-y-4">
                    { for visible.iter().map(note_card) }
                </div>
            }
        </div>
    }
}

fn force_relogin(dispatch: &Dispatch<Session>, navigator: Option<&Navigator>) {
    if let Some(navigator) = navigator {
        session::logout(dispatch, navigator);
    }
}

fn note_card(note: &Note) -> Html {
    html! {
        <div class="card bg-base-200 shadow" key={note.id}>
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h2 class="card-title">{ note.employee_name.clone() }</h2>
                    <span class={note_badge(note.note_type)}>{ note.note_type.to_string() }</span>
                </div>
                <p>{ note.note.clone() }</p>
                <p class="text-sm text-base-content/60">
                    { note.timestamp.format("%Y-%m-%d").to_string() }
                </p>
            </div>
        </div>
    }
}

fn note_badge(note_type: NoteType) -> &'static str {
    match note_type {
        NoteType::Positive => "badge badge-success",
        NoteType::Negative => "badge badge-error",
        NoteType::Neutral => "badge badge-ghost",
    }
}
