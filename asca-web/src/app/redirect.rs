//! Redirect-on-connect wiring.
//!
//! The guard itself lives in `asca_core::guard`; this hook feeds it from a
//! change notification on the connected flag. `use_effect_with` only runs
//! when the flag actually changes, so the guard sees transitions rather
//! than renders, and the redirect fires at most once per connection.

use asca_core::guard::NavigationGuard;
use yew::prelude::*;
use yew_router::prelude::Navigator;

use crate::router::Route;

#[hook]
pub fn use_redirect_on_connect(connected: bool, navigator: Option<Navigator>) {
    let guard = use_mut_ref(NavigationGuard::new);
    use_effect_with(connected, move |&connected| {
        if guard.borrow_mut().on_connection_change(connected) {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::protected());
            }
        }
    });
}
