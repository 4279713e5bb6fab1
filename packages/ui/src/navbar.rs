use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::auth_flow::use_auth_flow;
use crate::navigation::{Destination, NavLink};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let flow = use_auth_flow();
    let state = auth();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav {
            class: "navbar",
            div {
                class: "navbar-container",
                NavLink { to: Destination::Home, class: "navbar-brand", "⭐ Star Wars Films" }

                div {
                    class: "navbar-menu",
                    NavLink { to: Destination::Home, class: "navbar-link", "Home" }
                    NavLink { to: Destination::Films, class: "navbar-link", "Films" }
                    if state.is_admin() {
                        NavLink { to: Destination::NewFilm, class: "navbar-link", "New Film" }
                        NavLink { to: Destination::Sync, class: "navbar-link", "Sync" }
                    }
                }

                div {
                    class: "navbar-user",
                    if let Some(user) = state.user.clone() {
                        span { class: "user-name", "{user.display_name()}" }
                        if user.is_admin() {
                            span { class: "badge badge-admin", "Admin" }
                        }
                        button {
                            class: "btn btn-secondary btn-sm",
                            onclick: move |_| flow.logout(),
                            "Logout"
                        }
                    } else {
                        NavLink { to: Destination::Login, class: "btn btn-primary btn-sm", "Login" }
                        NavLink { to: Destination::Register, class: "btn btn-secondary btn-sm", "Register" }
                    }
                }
            }
        }
    }
}
