//! Path-based navigation through the History API.

use common::route::Route;
use wasm_bindgen::JsValue;

pub fn current_route() -> Route {
    let path = web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default();
    Route::from_path(&path)
}

/// Both writers leave the address bar alone for routes without an address.
pub fn push(route: Route) {
    let Some(path) = route.address() else {
        return;
    };
    if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
        history
            .push_state_with_url(&JsValue::NULL, "", Some(path))
            .ok();
    }
}

pub fn replace(route: Route) {
    let Some(path) = route.address() else {
        return;
    };
    if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(path))
            .ok();
    }
}
