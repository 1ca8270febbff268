use web_sys::MouseEvent;
use yew::prelude::*;

/// Visual affordance for the wallet-connect capability. The message, accent
/// color and corner radius are caller-configured and meaningless to the
/// connection logic itself.
#[derive(Properties, PartialEq, Clone)]
pub struct ConnectWalletButtonProps {
    pub message: AttrValue,
    #[prop_or(AttrValue::Static("#0538AF"))]
    pub primary_color: AttrValue,
    #[prop_or(15)]
    pub border_radius: u32,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Callback<()>,
}

#[function_component(ConnectWalletButton)]
pub fn connect_wallet_button(props: &ConnectWalletButtonProps) -> Html {
    let onclick = {
        let cb = props.onclick.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let style = format!(
        "background-color: {}; border-radius: {}px;",
        props.primary_color, props.border_radius
    );
    html! {
        <button
            class="text-white py-2 px-4"
            {style}
            disabled={props.disabled}
            {onclick}
        >
            { props.message.clone() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_message_and_affordance_style() {
        let props = ConnectWalletButtonProps {
            message: AttrValue::from("Connectez votre portefeuille"),
            primary_color: AttrValue::from("#0538AF"),
            border_radius: 15,
            disabled: false,
            onclick: Callback::noop(),
        };
        let html =
            block_on(LocalServerRenderer::<ConnectWalletButton>::with_props(props).render());
        assert!(html.contains("Connectez votre portefeuille"));
        assert!(html.contains("background-color: #0538AF"));
        assert!(html.contains("border-radius: 15px"));
    }
}
