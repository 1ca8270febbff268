#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod handlers;
pub mod redirect;
pub mod state;
pub mod view;

pub use handlers::AppHandlers;
pub use state::AppState;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();

    let navigator = use_navigator();
    let route = use_route::<Route>();

    redirect::use_redirect_on_connect(app_state.session.is_connected(), navigator.clone());

    let handlers = AppHandlers::new(&app_state, navigator);
    view::render_app(&app_state, &handlers, route.as_ref())
}
