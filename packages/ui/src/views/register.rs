//! Registration form. Local validation errors render inline; server errors
//! arrive as dialogs.

use api::RegisterRequest;
use dioxus::prelude::*;

use crate::auth::RedirectIfSignedIn;
use crate::auth_flow::{use_auth_flow, AuthError};
use crate::navigation::{Destination, NavLink};

#[component]
pub fn RegisterView() -> Element {
    let flow = use_auth_flow();
    let mut form = use_signal(RegisterRequest::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let flow = flow.clone();
        let request = form();
        error.set(None);
        submitting.set(true);
        spawn(async move {
            if let Err(AuthError::Validation(e)) = flow.register(request).await {
                error.set(Some(e.to_string()));
            }
            submitting.set(false);
        });
    };

    let busy = submitting();

    rsx! {
        RedirectIfSignedIn {
            div {
                class: "auth-container",
                div {
                    class: "auth-card",
                    h1 { "Create an account" }

                    if let Some(message) = error() {
                        div { class: "alert alert-error", "{message}" }
                    }

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
                                minlength: "8",
                                disabled: busy,
                                value: "{form.read().username}",
                                oninput: move |evt: FormEvent| form.write().username = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "email", "Email" }
                            input {
                                id: "email",
                                r#type: "email",
                                autocomplete: "email",
                                required: true,
                                disabled: busy,
                                value: "{form.read().email}",
                                oninput: move |evt: FormEvent| form.write().email = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "display_name", "Display name" }
                            input {
                                id: "display_name",
                                r#type: "text",
                                required: true,
                                disabled: busy,
                                value: "{form.read().display_name}",
                                oninput: move |evt: FormEvent| form.write().display_name = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "password", "Password" }
                            input {
                                id: "password",
                                r#type: "password",
                                autocomplete: "new-password",
                                required: true,
                                minlength: "8",
                                disabled: busy,
                                value: "{form.read().password}",
                                oninput: move |evt: FormEvent| form.write().password = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "confirm_password", "Confirm password" }
                            input {
                                id: "confirm_password",
                                r#type: "password",
                                autocomplete: "new-password",
                                required: true,
                                disabled: busy,
                                value: "{form.read().confirm_password}",
                                oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary btn-block",
                            disabled: busy,
                            if busy { "Creating account..." } else { "Register" }
                        }
                    }
                    p {
                        class: "auth-footer",
                        "Already registered? "
                        NavLink { to: Destination::Login, "Sign in" }
                    }
                }
            }
        }
    }
}
