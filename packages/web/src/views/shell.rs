//! Layout shared by every page: navigation context, navbar and footer.

use api::ApiClient;
use dioxus::prelude::*;
use dioxus::router::Navigator;
use ui::{redirect_on_unauthorized, Destination, Navbar, Navigate, NavigationProvider};

use crate::Route;

/// Navigates by replacing the current history entry.
#[derive(Clone, Copy)]
struct ReplaceRoute(Navigator);

impl Navigate for ReplaceRoute {
    fn navigate(&self, to: Destination) {
        self.0.replace(Route::from(to));
    }
}

#[component]
pub fn Shell() -> Element {
    let nav = use_navigator();
    let client = use_context::<ApiClient>();

    use_hook(|| redirect_on_unauthorized(&client, ReplaceRoute(nav)));

    rsx! {
        NavigationProvider {
            on_navigate: move |to: Destination| {
                nav.push(Route::from(to));
            },
            div {
                class: "app",
                Navbar {}
                main {
                    class: "main-content",
                    Outlet::<Route> {}
                }
                footer {
                    class: "footer",
                    p { "Star Wars Films © 2024 | May the Force be with you" }
                }
            }
        }
    }
}

/// Unknown paths go home.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    use_effect(move || {
        tracing::debug!(path = %segments.join("/"), "unknown route");
        nav.replace(Route::Home {});
    });
    rsx! {}
}
