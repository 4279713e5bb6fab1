//! Sign-in, registration and sign-out, sequenced with dialogs and a redirect.
//!
//! [`AuthFlow`] is generic over its three side channels (dialogs, navigation,
//! timers) so the same code runs in the app and against recording fakes.

use std::time::Duration;

use api::{ApiClient, ApiError, LoginRequest, RegisterRequest, Session};
use dioxus::prelude::*;
use store::ClientConfig;

use crate::clock::{Clock, TimerClock};
use crate::dialog::{use_dialogs, DialogRequest, DialogSink, Dialogs};
use crate::navigation::{use_navigation, Destination, Navigate, Navigation};

pub const MIN_USERNAME_LEN: usize = 8;
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Local checks run before a registration request is sent.
pub fn validate_registration(form: &RegisterRequest) -> Result<(), ValidationError> {
    let required = [
        ("Username", &form.username),
        ("Email", &form.email),
        ("Display name", &form.display_name),
        ("Password", &form.password),
        ("Password confirmation", &form.confirm_password),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ValidationError::Required(field));
        }
    }
    if form.username.trim().chars().count() < MIN_USERNAME_LEN {
        return Err(ValidationError::TooShort {
            field: "Username",
            min: MIN_USERNAME_LEN,
        });
    }
    if !form.email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            field: "Password",
            min: MIN_PASSWORD_LEN,
        });
    }
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

#[derive(Clone)]
pub struct AuthFlow<D, N, C> {
    api: ApiClient,
    dialogs: D,
    nav: N,
    clock: C,
    redirect_delay: Duration,
}

/// The flow wired to the app's contexts.
pub type AppAuthFlow = AuthFlow<Dialogs, Navigation, TimerClock>;

impl<D, N, C> AuthFlow<D, N, C>
where
    D: DialogSink + Clone + 'static,
    N: Navigate + Clone + 'static,
    C: Clock + Clone + 'static,
{
    pub fn new(api: ApiClient, dialogs: D, nav: N, clock: C, redirect_delay: Duration) -> Self {
        Self {
            api,
            dialogs,
            nav,
            clock,
            redirect_delay,
        }
    }

    /// Sign in, hold a welcome dialog for the redirect delay, then go to the
    /// films list. A failure shows an error dialog and leaves the session empty.
    pub async fn login(&self, credentials: LoginRequest) -> Result<Session, AuthError> {
        let response = match self.api.login(&credentials).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(username = %credentials.username, "sign in failed: {e}");
                self.dialogs.show(
                    DialogRequest::error(e.user_message("Could not sign in. Please try again."))
                        .title("Sign in failed"),
                );
                return Err(e.into());
            }
        };

        let session = Session::new(response.access_token, response.user);
        self.api.session().set(session.clone());
        tracing::info!(username = %session.user.username, "signed in");

        self.dialogs.show(
            DialogRequest::success(format!("Welcome back, {}!", session.user.display_name()))
                .title("Signed in")
                .suppress_buttons()
                .auto_close(self.redirect_delay),
        );
        self.clock.sleep(self.redirect_delay).await;
        self.nav.navigate(Destination::Films);
        Ok(session)
    }

    /// Validate locally, create the account, then sign in with the same
    /// credentials.
    pub async fn register(&self, form: RegisterRequest) -> Result<Session, AuthError> {
        validate_registration(&form)?;

        if let Err(e) = self.api.register(&form).await {
            tracing::warn!(username = %form.username, "registration failed: {e}");
            self.dialogs.show(
                DialogRequest::error(e.user_message("Could not create the account. Please try again."))
                    .title("Registration failed"),
            );
            return Err(e.into());
        }
        tracing::info!(username = %form.username, "account created");

        self.login(form.credentials()).await
    }

    /// Ask for confirmation; once confirmed, show a "signing out" dialog for
    /// the redirect delay, clear the session and go to the login page.
    pub fn logout(&self) {
        let flow = self.clone();
        self.dialogs.show(
            DialogRequest::confirm("Are you sure you want to sign out?", move || async move {
                flow.finish_logout().await;
                Ok(())
            })
            .title("Sign out")
            .confirm_label("Sign out"),
        );
    }

    async fn finish_logout(&self) {
        self.dialogs.show(
            DialogRequest::info("Signing out...")
                .title("Goodbye")
                .suppress_buttons()
                .auto_close(self.redirect_delay),
        );
        self.clock.sleep(self.redirect_delay).await;
        self.api.session().clear();
        tracing::info!("signed out");
        self.nav.navigate(Destination::Login);
    }
}

pub fn use_auth_flow() -> AppAuthFlow {
    let api = use_context::<ApiClient>();
    let config = use_context::<ClientConfig>();
    let dialogs = use_dialogs();
    let nav = use_navigation();
    use_hook(|| {
        AuthFlow::new(
            api,
            dialogs,
            nav,
            TimerClock,
            config.timings.redirect_delay(),
        )
    })
}
