use yew::{Html, function_component, html};

/// Neutral pending indicator shown while the session hydrates.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex items-center justify-center min-h-screen">
            <span class="loading loading-spinner loading-lg" aria-label="Loading"></span>
        </div>
    }
}
