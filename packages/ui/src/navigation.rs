//! App destinations and the navigation seam.
//!
//! The shared views never see the router's `Route` type. They ask for a
//! [`Destination`] and the platform package decides how to get there.

use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    Home,
    Login,
    Register,
    Films,
    FilmDetail(String),
    NewFilm,
    EditFilm(String),
    Sync,
}

impl Destination {
    pub fn path(&self) -> String {
        match self {
            Destination::Home => "/".to_string(),
            Destination::Login => "/login".to_string(),
            Destination::Register => "/register".to_string(),
            Destination::Films => "/films".to_string(),
            Destination::FilmDetail(id) => format!("/films/{id}"),
            Destination::NewFilm => "/films/new".to_string(),
            Destination::EditFilm(id) => format!("/films/{id}/edit"),
            Destination::Sync => "/sync".to_string(),
        }
    }
}

pub trait Navigate {
    fn navigate(&self, to: Destination);
}

/// Context value installed by [`NavigationProvider`].
#[derive(Clone, Copy, PartialEq)]
pub struct Navigation {
    on_navigate: EventHandler<Destination>,
}

impl Navigate for Navigation {
    fn navigate(&self, to: Destination) {
        tracing::debug!(path = %to.path(), "navigating");
        self.on_navigate.call(to);
    }
}

#[component]
pub fn NavigationProvider(on_navigate: EventHandler<Destination>, children: Element) -> Element {
    use_context_provider(|| Navigation { on_navigate });
    rsx! {
        {children}
    }
}

pub fn use_navigation() -> Navigation {
    use_context::<Navigation>()
}

/// An anchor that routes through [`Navigation`] instead of reloading the page.
#[component]
pub fn NavLink(
    to: Destination,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    let nav = use_navigation();
    let href = to.path();

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            onclick: move |evt: Event<MouseData>| {
                evt.prevent_default();
                nav.navigate(to.clone());
            },
            {children}
        }
    }
}
