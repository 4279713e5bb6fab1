use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::navigation::{Destination, NavLink};

#[component]
pub fn HomeView() -> Element {
    let auth = use_auth();

    rsx! {
        div {
            class: "home-container",
            div {
                class: "hero-section",
                h1 { class: "hero-title", "Welcome to Star Wars Films" }
                p { class: "hero-subtitle", "Explore every film of the Star Wars saga" }
                div {
                    class: "hero-actions",
                    NavLink { to: Destination::Films, class: "btn btn-primary", "Browse films" }
                    if !auth().is_authenticated() {
                        NavLink { to: Destination::Register, class: "btn btn-secondary", "Register" }
                    }
                }
            }

            div {
                class: "features",
                div {
                    class: "feature-card",
                    div { class: "feature-icon", "🎬" }
                    h3 { "Full catalog" }
                    p { "Every Star Wars film with its crawl, crew and release date." }
                }
                div {
                    class: "feature-card",
                    div { class: "feature-icon", "🔐" }
                    h3 { "Admin tools" }
                    p { "Administrators can create, edit and delete films." }
                }
                div {
                    class: "feature-card",
                    div { class: "feature-icon", "🔄" }
                    h3 { "Sync" }
                    p { "Keep the catalog up to date with the Star Wars API." }
                }
            }
        }
    }
}
