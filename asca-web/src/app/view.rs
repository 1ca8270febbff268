use yew::prelude::*;

use crate::app::handlers::AppHandlers;
use crate::app::state::AppState;
use crate::pages::dashboard::DashboardPage;
use crate::pages::landing::LandingPage;
use crate::pages::not_found::NotFound;
use crate::router::Route;

pub fn render_app(state: &AppState, handlers: &AppHandlers, route: Option<&Route>) -> Html {
    match route.cloned().unwrap_or(Route::Home) {
        Route::Home => html! {
            <LandingPage
                connected={state.session.is_connected()}
                connecting={state.session.is_connecting()}
                network={state.network.current()}
                form={(*state.auth).clone()}
                wallet_notice={(*state.wallet_notice).clone()}
                on_connect={handlers.connect.clone()}
                on_disconnect={handlers.disconnect.clone()}
                on_network_change={handlers.network_change.clone()}
                on_mode_change={handlers.mode_change.clone()}
                on_login_input={handlers.login_input.clone()}
                on_signup_input={handlers.signup_input.clone()}
                on_submit={handlers.submit.clone()}
            />
        },
        Route::Dashboard => html! {
            <DashboardPage
                connected={state.session.is_connected()}
                network={state.network.current()}
                on_disconnect={handlers.disconnect.clone()}
            />
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::use_app_state;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        route: Route,
    }

    #[function_component(ViewHarness)]
    fn view_harness(props: &HarnessProps) -> Html {
        let app_state = use_app_state();
        let handlers = AppHandlers::new(&app_state, None);
        render_app(&app_state, &handlers, Some(&props.route))
    }

    fn render_route(route: Route) -> String {
        block_on(
            LocalServerRenderer::<ViewHarness>::with_props(HarnessProps { route }).render(),
        )
    }

    #[test]
    fn home_route_renders_landing_copy() {
        let html = render_route(Route::Home);
        assert!(html.contains("Protocole ASCA"));
        assert!(html.contains("Rejoignez la communauté"));
    }

    #[test]
    fn dashboard_route_guards_disconnected_visitors() {
        let html = render_route(Route::Dashboard);
        assert!(html.contains("Accès réservé"));
    }

    #[test]
    fn unknown_route_renders_not_found() {
        let html = render_route(Route::NotFound);
        assert!(html.contains("Page introuvable"));
    }
}
