//! # Browser cookie jar — `document.cookie`
//!
//! [`DocumentJar`] is the [`CookieJar`] used on the **web platform**. Values are
//! URI-component encoded so serialized JSON survives the `;`-separated cookie
//! header.
//!
//! Failures (no window, a sandboxed document that rejects cookies) are logged and
//! otherwise ignored: the in-memory session keeps working for the current page,
//! it just will not survive a reload.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::cookies::{find_cookie, removal_string, set_cookie_string, CookieJar, CookieOptions};

#[derive(Clone, Debug, Default)]
pub struct DocumentJar;

impl DocumentJar {
    pub fn new() -> Self {
        Self
    }

    /// Whether the current page was served over `https:`.
    pub fn page_is_secure() -> bool {
        web_sys::window()
            .and_then(|w| w.location().protocol().ok())
            .is_some_and(|protocol| protocol == "https:")
    }

    fn document() -> Option<HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()
    }

    fn write(assignment: &str) {
        let Some(doc) = Self::document() else {
            tracing::warn!("no document available; cookie not written");
            return;
        };
        if let Err(e) = doc.set_cookie(assignment) {
            tracing::warn!("failed to write cookie: {e:?}");
        }
    }
}

impl CookieJar for DocumentJar {
    fn get(&self, name: &str) -> Option<String> {
        let header = Self::document()?.cookie().ok()?;
        let raw = find_cookie(&header, name)?;
        match js_sys::decode_uri_component(raw) {
            Ok(decoded) => Some(String::from(decoded)),
            Err(_) => {
                tracing::warn!(cookie = name, "cookie value is not valid URI encoding");
                None
            }
        }
    }

    fn set(&self, name: &str, value: &str, options: &CookieOptions) {
        let encoded = String::from(js_sys::encode_uri_component(value));
        Self::write(&set_cookie_string(name, &encoded, options));
    }

    fn remove(&self, name: &str) {
        Self::write(&removal_string(name));
    }
}
