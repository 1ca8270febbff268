use asca_core::network::Network;
use web_sys::{Event, HtmlSelectElement};
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NetworkSelectProps {
    pub network: Network,
    pub onchange: Callback<String>,
}

/// Chain-environment selector. The raw `<select>` value goes back to the
/// app state, which rejects anything outside {mainnet, testnet}.
#[function_component(NetworkSelect)]
pub fn network_select(props: &NetworkSelectProps) -> Html {
    let onchange = {
        let cb = props.onchange.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                cb.emit(select.value());
            }
        })
    };
    html! {
        <select
            id="network-select"
            class="text-gray-700 bg-white border border-gray-300 rounded-lg px-3 py-2"
            value={props.network.as_str()}
            aria-label="Réseau"
            {onchange}
        >
            { for Network::ALL.iter().map(|network| html! {
                <option value={network.as_str()} selected={*network == props.network}>
                    { network.label() }
                </option>
            }) }
        </select>
    }
}
