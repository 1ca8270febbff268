use asca_core::network::Network;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DashboardPageProps {
    pub connected: bool,
    pub network: Network,
    pub on_disconnect: Callback<()>,
}

/// Protected landing target. Reachable through the one-shot redirect once a
/// wallet session exists; visitors arriving without one get an access
/// notice instead of the dashboard shell.
#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    if !props.connected {
        return html! {
            <div class="min-h-screen flex items-center justify-center">
                <div class="bg-white p-6 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-900">{ "Accès réservé" }</h1>
                    <p class="mt-2 text-gray-500">
                        { "Connectez votre portefeuille pour accéder au tableau de bord." }
                    </p>
                    <a href="/" class="mt-4 inline-block text-blue-600 underline">
                        { "Retour à l'accueil" }
                    </a>
                </div>
            </div>
        };
    }

    let disconnect = {
        let cb = props.on_disconnect.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <div class="min-h-screen bg-gray-50">
            <nav class="flex items-center justify-between p-6">
                <span class="text-xl font-bold text-blue-600">{ "Protocole ASCA" }</span>
                <div class="flex items-center space-x-4">
                    <span class="text-gray-500">{ format!("Réseau : {}", props.network.label()) }</span>
                    <button
                        class="bg-blue-600 text-white py-2 px-4 rounded-lg hover:bg-blue-700"
                        onclick={disconnect}
                    >
                        { "Déconnexion" }
                    </button>
                </div>
            </nav>
            <main class="max-w-7xl mx-auto px-4 py-16">
                <h1 class="text-3xl font-extrabold text-gray-900">{ "Tableau de bord" }</h1>
                <p class="mt-4 text-lg text-gray-500">
                    { "Votre portefeuille est connecté. Vos tontines apparaîtront ici." }
                </p>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(connected: bool) -> String {
        let props = DashboardPageProps {
            connected,
            network: Network::Mainnet,
            on_disconnect: Callback::noop(),
        };
        block_on(LocalServerRenderer::<DashboardPage>::with_props(props).render())
    }

    #[test]
    fn shows_access_notice_when_disconnected() {
        let html = render(false);
        assert!(html.contains("Accès réservé"));
        assert!(!html.contains("Tableau de bord"));
    }

    #[test]
    fn shows_dashboard_shell_when_connected() {
        let html = render(true);
        assert!(html.contains("Tableau de bord"));
        assert!(html.contains("Déconnexion"));
    }
}
