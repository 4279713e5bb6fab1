use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::cookies::{CookieJar, CookieOptions};

/// In-memory CookieJar for tests and native builds.
///
/// Clones share the same entries, so a test can keep a handle and inspect what
/// the session store persisted.
#[derive(Clone, Debug, Default)]
pub struct MemoryJar {
    entries: Arc<Mutex<HashMap<String, (String, CookieOptions)>>>,
}

impl MemoryJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options the entry was last written with.
    pub fn options(&self, name: &str) -> Option<CookieOptions> {
        self.lock().get(name).map(|(_, opts)| opts.clone())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, (String, CookieOptions)>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CookieJar for MemoryJar {
    fn get(&self, name: &str) -> Option<String> {
        self.lock().get(name).map(|(value, _)| value.clone())
    }

    fn set(&self, name: &str, value: &str, options: &CookieOptions) {
        self.lock()
            .insert(name.to_string(), (value.to_string(), options.clone()));
    }

    fn remove(&self, name: &str) {
        self.lock().remove(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let jar = MemoryJar::new();
        assert!(jar.get("token").is_none());

        jar.set("token", "abc", &CookieOptions::default());
        assert_eq!(jar.get("token").as_deref(), Some("abc"));
        assert_eq!(jar.options("token").unwrap().expiry_days, 7);

        jar.remove("token");
        assert!(jar.is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let jar = MemoryJar::new();
        let other = jar.clone();
        jar.set("user", "{}", &CookieOptions::default());
        assert!(other.contains("user"));
    }
}
