//! # Session Store — who is logged in
//!
//! [`SessionStore`] is the single owner of the current [`Session`]. It mirrors the
//! in-memory state into two cookies (`token` and `user`) so identity survives a
//! reload, and restores from them once at startup.
//!
//! Token and user are always both present or both absent: a half-written pair in
//! the jar is treated as no session and wiped.
//!
//! [`SessionHandle`] is the shared, single-threaded handle the gateway and the UI
//! hold. Mutations are synchronous, so a read right after [`SessionHandle::set`]
//! already sees the new user, and subscribers are notified before `set` returns.

use std::cell::RefCell;
use std::rc::Rc;

use crate::cookies::{CookieJar, CookieOptions};
use crate::models::User;

pub const TOKEN_COOKIE: &str = "token";
pub const USER_COOKIE: &str = "user";

/// An authenticated identity: bearer token plus the user it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user.is_admin()
    }
}

pub struct SessionStore {
    jar: Box<dyn CookieJar>,
    options: CookieOptions,
    current: Option<Session>,
}

impl SessionStore {
    /// Read the jar and populate the in-memory session. Never fails: anything
    /// malformed is cleared and the store starts anonymous.
    pub fn restore(jar: impl CookieJar + 'static, options: CookieOptions) -> Self {
        let mut store = Self {
            jar: Box::new(jar),
            options,
            current: None,
        };

        let token = store.jar.get(TOKEN_COOKIE);
        let user = store.jar.get(USER_COOKIE);
        match (token, user) {
            (Some(token), Some(user_json)) => match serde_json::from_str::<User>(&user_json) {
                Ok(user) => {
                    tracing::debug!(username = %user.username, "restored session");
                    store.current = Some(Session::new(token, user));
                }
                Err(e) => {
                    tracing::warn!("stored user record is malformed, clearing session: {e}");
                    store.remove_cookies();
                }
            },
            (None, None) => {}
            _ => {
                tracing::warn!("incomplete session cookies, clearing");
                store.remove_cookies();
            }
        }
        store
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    pub fn user(&self) -> Option<&User> {
        self.current.as_ref().map(|s| &s.user)
    }

    pub fn is_admin(&self) -> bool {
        self.current.as_ref().is_some_and(Session::is_admin)
    }

    pub fn set(&mut self, session: Session) {
        match serde_json::to_string(&session.user) {
            Ok(user_json) => {
                self.jar.set(TOKEN_COOKIE, &session.token, &self.options);
                self.jar.set(USER_COOKIE, &user_json, &self.options);
            }
            Err(e) => {
                // Keep the pair invariant in the jar: persist neither.
                tracing::warn!("could not serialize user, session not persisted: {e}");
                self.remove_cookies();
            }
        }
        self.current = Some(session);
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.remove_cookies();
    }

    fn remove_cookies(&self) {
        self.jar.remove(TOKEN_COOKIE);
        self.jar.remove(USER_COOKIE);
    }
}

type Listener = Rc<dyn Fn(Option<&Session>)>;

struct Shared {
    store: SessionStore,
    listeners: Vec<Listener>,
}

/// Cheaply clonable handle to the process-wide [`SessionStore`].
#[derive(Clone)]
pub struct SessionHandle {
    shared: Rc<RefCell<Shared>>,
}

impl SessionHandle {
    pub fn new(store: SessionStore) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                store,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn restore(jar: impl CookieJar + 'static, options: CookieOptions) -> Self {
        Self::new(SessionStore::restore(jar, options))
    }

    pub fn current(&self) -> Option<Session> {
        self.shared.borrow().store.current().cloned()
    }

    pub fn token(&self) -> Option<String> {
        self.shared.borrow().store.token().map(str::to_string)
    }

    pub fn user(&self) -> Option<User> {
        self.shared.borrow().store.user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.shared.borrow().store.current().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.shared.borrow().store.is_admin()
    }

    pub fn set(&self, session: Session) {
        self.shared.borrow_mut().store.set(session);
        self.notify();
    }

    pub fn clear(&self) {
        self.shared.borrow_mut().store.clear();
        self.notify();
    }

    /// Call `listener` after every `set` and `clear` with the new session.
    pub fn subscribe(&self, listener: impl Fn(Option<&Session>) + 'static) {
        self.shared.borrow_mut().listeners.push(Rc::new(listener));
    }

    fn notify(&self) {
        // Release the borrow first; listeners may read the handle again.
        let (listeners, snapshot) = {
            let shared = self.shared.borrow();
            (shared.listeners.clone(), shared.store.current().cloned())
        };
        for listener in listeners {
            listener(snapshot.as_ref());
        }
    }
}
