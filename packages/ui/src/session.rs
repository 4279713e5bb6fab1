//! Shared session constructor for all platforms.
//!
//! Returns a [`store::SessionHandle`] backed by the appropriate [`store::CookieJar`]:
//! - **Web** (WASM + `web` feature): `document.cookie` via [`store::DocumentJar`]
//! - **Everything else**: an in-memory jar, so the session lasts for the process

use store::config::SessionConfig;
use store::{CookieOptions, SessionHandle};

/// Restore the session from the platform's cookie jar.
pub fn make_session(config: &SessionConfig) -> SessionHandle {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        let options = CookieOptions::session(config.expiry_days, store::DocumentJar::page_is_secure());
        SessionHandle::restore(store::DocumentJar::new(), options)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let options = CookieOptions::session(config.expiry_days, false);
        SessionHandle::restore(store::MemoryJar::new(), options)
    }
}
