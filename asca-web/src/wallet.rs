//! Browser bridge to the wallet-connect capability.
//!
//! The capability is a narrow contract: an opaque asynchronous handshake
//! that either succeeds or fails. Discovery follows the CIP-30 injection
//! convention, where extensions register an object exposing `enable()`
//! under `window.cardano.<name>`. The injected API is stateless from our
//! side, so `disconnect` has nothing to tear down in the browser; the
//! session status itself lives in `asca_core::wallet`.

use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

/// Upper bound on the handshake; beyond it the attempt is abandoned.
pub const CONNECT_TIMEOUT_MS: i32 = 30_000;

#[cfg(target_arch = "wasm32")]
const TIMEOUT_MARKER: &str = "wallet-connect-timeout";

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("no wallet extension detected")]
    NoProvider,
    #[error("wallet handshake failed: {0}")]
    Handshake(String),
    #[error("wallet handshake timed out")]
    Timeout,
}

/// Run the wallet handshake against the first injected provider.
///
/// # Errors
///
/// Returns [`WalletError::NoProvider`] when no extension is injected,
/// [`WalletError::Timeout`] when the handshake exceeds
/// [`CONNECT_TIMEOUT_MS`], and [`WalletError::Handshake`] for every other
/// rejection, including the user cancelling the request.
#[cfg(target_arch = "wasm32")]
pub async fn connect() -> Result<(), WalletError> {
    use js_sys::{Array, Promise};
    use wasm_bindgen_futures::JsFuture;

    let (provider, enable) = injected_provider().ok_or(WalletError::NoProvider)?;
    let handshake: Promise = enable
        .call0(&provider)
        .map_err(|e| WalletError::Handshake(crate::dom::js_error_message(&e)))?
        .dyn_into()
        .map_err(|_| WalletError::Handshake(String::from("enable() did not return a promise")))?;

    let contenders = Array::new();
    contenders.push(&handshake);
    contenders.push(&crate::dom::reject_after(CONNECT_TIMEOUT_MS, TIMEOUT_MARKER));

    match JsFuture::from(Promise::race(&contenders)).await {
        Ok(_) => Ok(()),
        Err(reason) => {
            let message = crate::dom::js_error_message(&reason);
            if message == TIMEOUT_MARKER {
                Err(WalletError::Timeout)
            } else {
                Err(WalletError::Handshake(message))
            }
        }
    }
}

/// Native builds have no injected extension; the handshake always fails.
#[cfg(not(target_arch = "wasm32"))]
pub async fn connect() -> Result<(), WalletError> {
    Err(WalletError::NoProvider)
}

/// Terminate the external session. The CIP-30 surface keeps no connection
/// object on the page, so this only exists to satisfy the capability
/// contract symmetrically.
pub fn disconnect() {}

/// First injected object under `window.cardano` that exposes `enable()`.
#[cfg(target_arch = "wasm32")]
fn injected_provider() -> Option<(JsValue, js_sys::Function)> {
    use js_sys::{Function, Object, Reflect};

    let cardano = Reflect::get(&crate::dom::window(), &JsValue::from_str("cardano")).ok()?;
    let providers = cardano.dyn_into::<Object>().ok()?;
    for key in Object::keys(&providers).iter() {
        let Ok(candidate) = Reflect::get(&providers, &key) else {
            continue;
        };
        let Ok(enable) = Reflect::get(&candidate, &JsValue::from_str("enable")) else {
            continue;
        };
        if let Some(function) = enable.dyn_ref::<Function>() {
            return Some((candidate, function.clone()));
        }
    }
    None
}
