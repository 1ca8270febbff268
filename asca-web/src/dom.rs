use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Build a promise that rejects with `marker` after the given delay.
///
/// Raced against the wallet handshake so a stalled extension cannot leave
/// the page in the connecting state forever.
///
/// # Panics
/// Panics if no browser `window` is available.
#[must_use]
pub fn reject_after(duration_ms: i32, marker: &'static str) -> Promise {
    Promise::new(&mut |_resolve, reject| {
        let closure = Closure::once(move || {
            let _ = reject.call1(&JsValue::UNDEFINED, &JsValue::from_str(marker));
        });
        let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            duration_ms,
        );
        closure.forget();
    })
}
