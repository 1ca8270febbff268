use asca_core::auth::{AuthMode, LoginField, SignupField, Submission};
use yew::prelude::*;
use yew_router::prelude::Navigator;

use crate::app::state::{AppState, WALLET_FAILURE_NOTICE};
use crate::router::Route;

#[derive(Clone)]
pub struct AppHandlers {
    pub connect: Callback<()>,
    pub disconnect: Callback<()>,
    pub network_change: Callback<String>,
    pub mode_change: Callback<AuthMode>,
    pub login_input: Callback<(LoginField, String)>,
    pub signup_input: Callback<(SignupField, String)>,
    pub submit: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, navigator: Option<Navigator>) -> Self {
        Self {
            connect: build_connect(state),
            disconnect: build_disconnect(state),
            network_change: build_network_change(state),
            mode_change: build_mode_change(state),
            login_input: build_login_input(state),
            signup_input: build_signup_input(state),
            submit: build_submit(state, navigator),
        }
    }
}

fn build_connect(state: &AppState) -> Callback<()> {
    let session_handle = state.session.clone();
    let notice_handle = state.wallet_notice.clone();
    Callback::from(move |()| {
        let mut session = (*session_handle).clone();
        if !session.begin_connect() {
            // A handshake is already in flight or the wallet is connected.
            return;
        }
        notice_handle.set(None);
        session_handle.set(session.clone());

        let session_handle = session_handle.clone();
        let notice_handle = notice_handle.clone();
        #[cfg(target_arch = "wasm32")]
        {
            wasm_bindgen_futures::spawn_local(async move {
                match crate::wallet::connect().await {
                    Ok(()) => session.complete_connect(),
                    Err(err) => {
                        session.fail_connect(&err.to_string());
                        notice_handle.set(Some(AttrValue::Static(WALLET_FAILURE_NOTICE)));
                    }
                }
                session_handle.set(session);
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            // No extension outside the browser; settle the handshake inline.
            session.fail_connect("no provider outside the browser");
            notice_handle.set(Some(AttrValue::Static(WALLET_FAILURE_NOTICE)));
            session_handle.set(session);
        }
    })
}

fn build_disconnect(state: &AppState) -> Callback<()> {
    let session_handle = state.session.clone();
    Callback::from(move |()| {
        crate::wallet::disconnect();
        let mut session = (*session_handle).clone();
        session.disconnect();
        session_handle.set(session);
    })
}

fn build_network_change(state: &AppState) -> Callback<String> {
    let network_handle = state.network.clone();
    Callback::from(move |raw: String| {
        let mut selection = (*network_handle).clone();
        match selection.select_str(&raw) {
            Ok(network) => {
                log::info!("network switched to {network}");
                network_handle.set(selection);
            }
            Err(err) => log::warn!("rejected network selection: {err}"),
        }
    })
}

fn build_mode_change(state: &AppState) -> Callback<AuthMode> {
    let auth_handle = state.auth.clone();
    Callback::from(move |mode: AuthMode| {
        let mut form = (*auth_handle).clone();
        form.set_mode(mode);
        auth_handle.set(form);
    })
}

fn build_login_input(state: &AppState) -> Callback<(LoginField, String)> {
    let auth_handle = state.auth.clone();
    Callback::from(move |(field, value): (LoginField, String)| {
        let mut form = (*auth_handle).clone();
        form.set_login_field(field, value);
        auth_handle.set(form);
    })
}

fn build_signup_input(state: &AppState) -> Callback<(SignupField, String)> {
    let auth_handle = state.auth.clone();
    Callback::from(move |(field, value): (SignupField, String)| {
        let mut form = (*auth_handle).clone();
        form.set_signup_field(field, value);
        auth_handle.set(form);
    })
}

fn build_submit(state: &AppState, navigator: Option<Navigator>) -> Callback<()> {
    let auth_handle = state.auth.clone();
    Callback::from(move |()| {
        let mut form = (*auth_handle).clone();
        match form.submit() {
            // The submission targets are external collaborators; locally we
            // only acknowledge them.
            Some(Submission::Login(request)) => {
                log::info!("session requested for {}", request.email);
                if let Some(nav) = navigator.as_ref() {
                    nav.push(&Route::protected());
                }
            }
            Some(Submission::Signup(request)) => {
                log::info!("registration recorded for {}", request.email);
            }
            None => {}
        }
        auth_handle.set(form);
    })
}
