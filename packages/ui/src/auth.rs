//! Authentication context and hooks for the UI.

use api::{ApiClient, User};
use dioxus::prelude::*;

use crate::navigation::{use_navigation, Destination, Navigate};

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that mirrors the session into a signal.
/// Must sit below the [`ApiClient`] context.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_context::<ApiClient>();
    let auth_state = use_signal(|| AuthState {
        user: client.session().user(),
    });

    // Session changes come from the auth flow and from 401 responses alike.
    use_hook(|| {
        client.session().subscribe(move |session| {
            let mut auth_state = auth_state;
            auth_state.set(AuthState {
                user: session.map(|s| s.user.clone()),
            });
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Send the visitor to the login view whenever a request comes back 401. The
/// session is already cleared when `nav` is called.
pub fn redirect_on_unauthorized(client: &ApiClient, nav: impl Navigate + 'static) {
    client.on_unauthorized(move || {
        tracing::info!("session expired, redirecting to login");
        nav.navigate(Destination::Login);
    });
}

/// Where a visitor must be sent instead of seeing a guarded page.
pub fn guard_redirect(state: &AuthState, require_admin: bool) -> Option<Destination> {
    if !state.is_authenticated() {
        Some(Destination::Login)
    } else if require_admin && !state.is_admin() {
        Some(Destination::Films)
    } else {
        None
    }
}

/// Renders `children` only for signed-in users (admins when `admin` is set).
#[component]
pub fn RequireAuth(#[props(default)] admin: bool, children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigation();

    use_effect(move || {
        if let Some(to) = guard_redirect(&auth(), admin) {
            tracing::debug!(path = %to.path(), "route guard redirect");
            nav.navigate(to);
        }
    });

    if guard_redirect(&auth(), admin).is_some() {
        return rsx! {};
    }
    rsx! {
        {children}
    }
}

/// Sends visitors who are already signed in to the films list. Checked once on
/// mount, so a login that happens on the page itself is left alone.
#[component]
pub fn RedirectIfSignedIn(children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigation();
    let signed_in_on_mount = use_hook(|| auth.peek().is_authenticated());

    use_effect(move || {
        if signed_in_on_mount {
            nav.navigate(Destination::Films);
        }
    });

    if signed_in_on_mount {
        return rsx! {};
    }
    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ApiError, Role, Session};
    use store::{CookieOptions, MemoryJar, SessionHandle};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::testing::{Event, Recorder};

    fn user(role: Role) -> User {
        User {
            id: "1".into(),
            username: "luke".into(),
            email: None,
            display_name: None,
            role,
        }
    }

    #[test]
    fn test_guard_anonymous_goes_to_login() {
        let state = AuthState::default();
        assert_eq!(guard_redirect(&state, false), Some(Destination::Login));
        assert_eq!(guard_redirect(&state, true), Some(Destination::Login));
    }

    #[test]
    fn test_guard_admin_only() {
        let state = AuthState { user: Some(user(Role::User)) };
        assert_eq!(guard_redirect(&state, false), None);
        assert_eq!(guard_redirect(&state, true), Some(Destination::Films));

        let state = AuthState { user: Some(user(Role::Admin)) };
        assert!(state.is_admin());
        assert_eq!(guard_redirect(&state, true), None);
    }

    #[tokio::test]
    async fn test_expired_session_lands_on_login() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/starwars/films"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let session = SessionHandle::restore(MemoryJar::new(), CookieOptions::default());
        session.set(Session::new("stale", user(Role::Admin)));
        let client = ApiClient::new(server.uri(), session.clone());
        let rec = Recorder::default();
        redirect_on_unauthorized(&client, rec.clone());

        let err = client.list_films().await.unwrap_err();

        assert!(matches!(err, ApiError::Unauthorized { .. }));
        assert!(!session.is_authenticated());
        assert_eq!(rec.events(), vec![Event::Navigated(Destination::Login)]);
    }

    #[tokio::test]
    async fn test_other_failures_do_not_redirect() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/starwars/films"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let session = SessionHandle::restore(MemoryJar::new(), CookieOptions::default());
        session.set(Session::new("tok", user(Role::User)));
        let client = ApiClient::new(server.uri(), session.clone());
        let rec = Recorder::default();
        redirect_on_unauthorized(&client, rec.clone());

        assert!(client.list_films().await.is_err());
        assert!(session.is_authenticated());
        assert!(rec.events().is_empty());
    }
}
