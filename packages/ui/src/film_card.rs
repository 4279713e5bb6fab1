use api::{Film, FilmSource};
use dioxus::prelude::*;

use crate::format::{excerpt, format_date};
use crate::navigation::{Destination, NavLink};

const CRAWL_EXCERPT_CHARS: usize = 150;

/// Source and modification badges shown on cards and the detail page.
#[component]
pub fn FilmBadges(source: FilmSource, is_modified: bool) -> Element {
    rsx! {
        span {
            class: "badges",
            {match source {
                FilmSource::Api => rsx! { span { class: "badge badge-api", "API" } },
                FilmSource::Local => rsx! { span { class: "badge badge-local", "Local" } },
            }}
            if is_modified {
                span { class: "badge badge-modified", "Modified" }
            }
        }
    }
}

#[component]
pub fn FilmCard(film: Film) -> Element {
    let crawl = excerpt(&film.opening_crawl, CRAWL_EXCERPT_CHARS);
    let released = format_date(&film.release_date);

    rsx! {
        NavLink {
            to: Destination::FilmDetail(film.id.clone()),
            class: "film-card",
            div {
                class: "film-card-header",
                h3 { class: "film-title", "Episode {film.episode_id}: {film.title}" }
                FilmBadges { source: film.source, is_modified: film.is_modified }
            }
            div {
                class: "film-card-body",
                p { class: "film-opening", "{crawl}" }
                div {
                    class: "film-meta",
                    div { class: "meta-item", strong { "Director: " } "{film.director}" }
                    div { class: "meta-item", strong { "Released: " } "{released}" }
                }
            }
        }
    }
}
