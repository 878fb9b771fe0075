use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::routes::MainRoute;
use crate::session::{self, Session};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Chrome around protected pages: navbar with the signed-in identity and a
/// logout control. The bearer token is never rendered.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (session_state, dispatch) = use_store::<Session>();
    let navigator = use_navigator();

    let on_logout = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = navigator.clone() {
            session::logout(&dispatch, &navigator);
        }
    });

    html! {
        <>
            <nav class="navbar justify-between bg-base-300">
                <Link<MainRoute> to={MainRoute::Dashboard} classes="btn btn-ghost text-lg">
                    {"Performance Notes"}
                </Link<MainRoute>>
                <ul class="hidden menu sm:menu-horizontal">
                    <li>
                        <Link<MainRoute> to={MainRoute::Notes}>{"Notes"}</Link<MainRoute>>
                    </li>
                </ul>
                <div class="flex items-center gap-2">
                    {
                        session_state.user.as_ref().map_or_else(
                            || html! {},
                            |user| html! {
                                <>
                                    <span class="text-sm text-base-content/80 mr-2">
                                        { format!("{} ({})", user.name, user.role) }
                                    </span>
                                    <button class="btn btn-outline btn-sm" onclick={on_logout.clone()}>
                                        {"Logout"}
                                    </button>
                                </>
                            },
                        )
                    }
                </div>
            </nav>
            <div class="min-h-screen bg-base-100">
                <main class="flex-grow p-4">
                    { props.children.clone() }
                </main>
                <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                    <div>
                        <p>{"Performance Management · Powered by Rust, Yew and DaisyUI"}</p>
                    </div>
                </footer>
            </div>
        </>
    }
}
