//! # Durable key/value storage with expiry
//!
//! The session survives page reloads by living in two cookies. [`CookieJar`] is
//! the seam: the browser build writes `document.cookie` through
//! [`crate::DocumentJar`], everything else (tests, native builds) uses
//! [`crate::MemoryJar`].
//!
//! Cookies are always host-only (no `Domain` attribute), scoped to `/` and
//! `SameSite=Strict`.

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Attributes written alongside every cookie value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieOptions {
    pub expiry_days: u32,
    /// Mirrors the transport security of the page itself.
    pub secure: bool,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            expiry_days: 7,
            secure: false,
        }
    }
}

impl CookieOptions {
    /// Options for session cookies: strict same-site, `Secure` when the page is.
    pub fn session(expiry_days: u32, page_is_secure: bool) -> Self {
        Self {
            expiry_days,
            secure: page_is_secure,
        }
    }

    pub fn max_age_secs(&self) -> u64 {
        u64::from(self.expiry_days) * SECONDS_PER_DAY
    }

    /// Attribute suffix for a `document.cookie` assignment, starting with `; `.
    pub fn attributes(&self) -> String {
        let mut attrs = format!(
            "; Path=/; Max-Age={}; SameSite=Strict",
            self.max_age_secs()
        );
        if self.secure {
            attrs.push_str("; Secure");
        }
        attrs
    }
}

/// A small durable key/value store with per-entry expiry.
pub trait CookieJar {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&self, name: &str, value: &str, options: &CookieOptions);
    fn remove(&self, name: &str);
}

impl<J: CookieJar + ?Sized> CookieJar for Box<J> {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn set(&self, name: &str, value: &str, options: &CookieOptions) {
        (**self).set(name, value, options)
    }

    fn remove(&self, name: &str) {
        (**self).remove(name)
    }
}

/// Full assignment string, e.g. `token=abc; Path=/; Max-Age=604800; SameSite=Strict`.
///
/// `value` must already be encoded.
pub fn set_cookie_string(name: &str, value: &str, options: &CookieOptions) -> String {
    format!("{name}={value}{}", options.attributes())
}

/// Assignment that expires `name` immediately.
pub fn removal_string(name: &str) -> String {
    format!("{name}=; Path=/; Max-Age=0")
}

/// Find the raw (still encoded) value of `name` in a `document.cookie` header.
pub fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}
