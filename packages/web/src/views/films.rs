//! Film pages. The listing is public, details need a session and the
//! create/edit forms need an admin.

use dioxus::prelude::*;
use ui::views::{FilmDetailView, FilmFormView, FilmListView};
use ui::RequireAuth;

#[component]
pub fn Films() -> Element {
    rsx! {
        FilmListView {}
    }
}

#[component]
pub fn FilmDetail(id: String) -> Element {
    rsx! {
        RequireAuth {
            FilmDetailView { id }
        }
    }
}

#[component]
pub fn NewFilm() -> Element {
    rsx! {
        RequireAuth {
            admin: true,
            FilmFormView { id: None }
        }
    }
}

#[component]
pub fn EditFilm(id: String) -> Element {
    rsx! {
        RequireAuth {
            admin: true,
            FilmFormView { id: Some(id) }
        }
    }
}
