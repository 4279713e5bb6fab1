//! This crate contains all shared UI for the workspace.
//!
//! The four pieces that carry behaviour are the session constructor
//! ([`make_session`]), the dialog sequencer ([`dialog`]), the auth flow
//! ([`auth_flow`]) and the navigation seam ([`navigation`]). The views are thin
//! on top of them.

pub mod auth_flow;
pub mod clock;
pub mod dialog;
pub mod format;
pub mod navigation;
pub mod views;

mod session;
pub use session::make_session;

mod auth;
pub use auth::{guard_redirect, redirect_on_unauthorized, use_auth, AuthProvider, AuthState, RedirectIfSignedIn, RequireAuth};

mod navbar;
pub use navbar::Navbar;

mod page_task;
pub use page_task::{use_page_task, PageTask};

mod film_card;
pub use film_card::{FilmBadges, FilmCard};

pub use auth_flow::{use_auth_flow, AppAuthFlow, AuthError, AuthFlow, ValidationError};
pub use clock::{Clock, TimerClock};
pub use dialog::{use_dialogs, DialogProvider, DialogRequest, DialogTimings, Dialogs};
pub use navigation::{use_navigation, Destination, NavLink, Navigate, NavigationProvider};

#[cfg(test)]
mod testing;
