//! Sign-in form.

use api::LoginRequest;
use dioxus::prelude::*;

use crate::auth::RedirectIfSignedIn;
use crate::auth_flow::use_auth_flow;
use crate::navigation::{Destination, NavLink};

#[component]
pub fn LoginView() -> Element {
    let flow = use_auth_flow();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let flow = flow.clone();
        let credentials = LoginRequest {
            username: username().trim().to_string(),
            password: password(),
        };
        submitting.set(true);
        spawn(async move {
            // Failures already surfaced as an error dialog.
            let _ = flow.login(credentials).await;
            submitting.set(false);
        });
    };

    rsx! {
        RedirectIfSignedIn {
            div {
                class: "auth-container",
                div {
                    class: "auth-card",
                    h1 { "Sign in" }
                    form {
                        class: "auth-form",
                        onsubmit,
                        div {
                            class: "form-group",
                            label { r#for: "username", "Username" }
                            input {
                                id: "username",
                                r#type: "text",
                                autocomplete: "username",
                                required: true,
                                disabled: submitting(),
                                value: "{username}",
                                oninput: move |evt: FormEvent| username.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "password", "Password" }
                            input {
                                id: "password",
                                r#type: "password",
                                autocomplete: "current-password",
                                required: true,
                                disabled: submitting(),
                                value: "{password}",
                                oninput: move |evt: FormEvent| password.set(evt.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary btn-block",
                            disabled: submitting(),
                            if submitting() { "Signing in..." } else { "Sign in" }
                        }
                    }
                    p {
                        class: "auth-footer",
                        "No account yet? "
                        NavLink { to: Destination::Register, "Register here" }
                    }
                }
            }
        }
    }
}
