//! Session cookie access through `document.cookie`.

use chrono::Utc;
use common::session::{self, SessionToken, SESSION_COOKIE, SESSION_DAYS};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()
}

pub fn has_session() -> bool {
    html_document()
        .and_then(|document| document.cookie().ok())
        .and_then(|jar| session::read_cookie(&jar, SESSION_COOKIE))
        .is_some()
}

pub fn store(token: &SessionToken) {
    if let Some(document) = html_document() {
        let cookie = session::set_cookie(SESSION_COOKIE, token.as_str(), SESSION_DAYS, Utc::now());
        document.set_cookie(&cookie).ok();
    }
}

pub fn clear() {
    if let Some(document) = html_document() {
        document.set_cookie(&session::delete_cookie(SESSION_COOKIE)).ok();
    }
}
