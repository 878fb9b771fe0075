use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::routes::{MainRoute, switch};
use crate::session::{self, Session};

/// Application root: hydrates the session from local storage once at
/// startup, then hands everything to the router. Guards on each protected
/// route hold rendering until hydration finishes.
#[function_component(App)]
pub fn app() -> Html {
    let (_session, dispatch) = use_store::<Session>();

    use_effect_with((), move |()| {
        session::hydrate(&dispatch);
        || ()
    });

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
        </BrowserRouter>
    }
}
