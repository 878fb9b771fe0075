use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::MainRoute;

/// Fallback page for unrecognized routes.
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] gap-4">
            <h1 class="text-3xl font-bold">{"Page not found"}</h1>
            <Link<MainRoute> to={MainRoute::Dashboard} classes="btn btn-primary">
                {"Back to dashboard"}
            </Link<MainRoute>>
        </div>
    }
}
