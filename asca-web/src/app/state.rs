use asca_core::auth::AuthForm;
use asca_core::network::NetworkSelection;
use asca_core::wallet::WalletSession;
use yew::prelude::*;

/// Non-blocking notice shown when the wallet handshake fails.
pub const WALLET_FAILURE_NOTICE: &str =
    "Échec de la connexion au portefeuille. Veuillez réessayer.";

#[derive(Clone)]
pub struct AppState {
    pub session: UseStateHandle<WalletSession>,
    pub network: UseStateHandle<NetworkSelection>,
    pub auth: UseStateHandle<AuthForm>,
    pub wallet_notice: UseStateHandle<Option<AttrValue>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        session: use_state(WalletSession::new),
        network: use_state(NetworkSelection::new),
        auth: use_state(AuthForm::new),
        wallet_notice: use_state(|| None),
    }
}
