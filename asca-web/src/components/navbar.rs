use asca_core::network::Network;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::connect_button::ConnectWalletButton;
use crate::components::network_select::NetworkSelect;

#[derive(Properties, PartialEq, Clone)]
pub struct NavbarProps {
    pub connected: bool,
    pub connecting: bool,
    pub network: Network,
    pub on_connect: Callback<()>,
    pub on_disconnect: Callback<()>,
    pub on_network_change: Callback<String>,
    pub on_show_login: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let show_login = {
        let cb = props.on_show_login.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let disconnect = {
        let cb = props.on_disconnect.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <nav class="flex items-center justify-between p-6" aria-label="Navigation principale">
            <div class="flex items-center">
                <span class="text-xl font-bold text-blue-600">{ "Protocole ASCA" }</span>
            </div>
            <div class="flex items-center space-x-8 text-gray-700">
                <a href="#features" class="hover:text-blue-600">{ "Fonctionnalités du protocole" }</a>
                <a href="#how-it-works" class="hover:text-blue-600">{ "Comment ça marche" }</a>
                <a href="#testimonials" class="hover:text-blue-600">{ "Témoignages des utilisateurs" }</a>
            </div>
            <div class="flex items-center space-x-4">
                <button class="text-gray-700 hover:text-blue-600" onclick={show_login}>
                    { "Connexion" }
                </button>
                if props.connected {
                    <button
                        class="bg-blue-600 text-white py-2 px-4 rounded-lg hover:bg-blue-700"
                        onclick={disconnect}
                    >
                        { "Déconnexion" }
                    </button>
                } else {
                    <ConnectWalletButton
                        message="Connectez votre portefeuille"
                        disabled={props.connecting}
                        onclick={props.on_connect.clone()}
                    />
                }
                <NetworkSelect network={props.network} onchange={props.on_network_change.clone()} />
            </div>
        </nav>
    }
}
