use api::{ApiClient, Film, FilmSource};
use dioxus::prelude::*;

use super::Loading;
use crate::film_card::FilmCard;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilmFilter {
    #[default]
    All,
    Api,
    Local,
    Modified,
}

impl FilmFilter {
    pub const TABS: [FilmFilter; 4] = [
        FilmFilter::All,
        FilmFilter::Api,
        FilmFilter::Local,
        FilmFilter::Modified,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilmFilter::All => "All",
            FilmFilter::Api => "API",
            FilmFilter::Local => "Local",
            FilmFilter::Modified => "Modified",
        }
    }

    pub fn matches(self, film: &Film) -> bool {
        match self {
            FilmFilter::All => true,
            FilmFilter::Api => film.source == FilmSource::Api,
            FilmFilter::Local => film.source == FilmSource::Local,
            FilmFilter::Modified => film.is_modified,
        }
    }

    pub fn count(self, films: &[Film]) -> usize {
        films.iter().filter(|f| self.matches(f)).count()
    }
}

/// Films passing `filter`, ordered by episode number.
pub fn filter_films(films: &[Film], filter: FilmFilter) -> Vec<Film> {
    let mut visible: Vec<Film> = films.iter().filter(|f| filter.matches(f)).cloned().collect();
    visible.sort_by_key(|f| f.episode_id);
    visible
}

/// Film listing with source filters.
#[component]
pub fn FilmListView() -> Element {
    let client = use_context::<ApiClient>();
    let mut filter = use_signal(FilmFilter::default);

    let films = use_resource(move || {
        let client = client.clone();
        async move { client.list_films().await }
    });

    let body = match &*films.read() {
        None => rsx! { Loading {} },
        Some(Err(e)) => {
            tracing::warn!("failed to load films: {e}");
            let message = e.user_message("Could not load the films.");
            rsx! {
                div { class: "alert alert-error", "{message}" }
            }
        }
        Some(Ok(all)) => {
            let visible = filter_films(all, filter());
            rsx! {
                div {
                    class: "filter-buttons",
                    for tab in FilmFilter::TABS {
                        button {
                            key: "{tab.label()}",
                            class: if filter() == tab { "btn btn-primary" } else { "btn btn-secondary" },
                            onclick: move |_| filter.set(tab),
                            "{tab.label()} ({tab.count(all)})"
                        }
                    }
                }
                if visible.is_empty() {
                    div {
                        class: "empty-state",
                        p { "No films to show" }
                    }
                } else {
                    div {
                        class: "films-grid",
                        for film in visible {
                            FilmCard { key: "{film.id}", film: film.clone() }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "container",
            div {
                class: "page-header",
                h1 { "Star Wars Films" }
            }
            {body}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film(id: &str, episode: u32, source: FilmSource, modified: bool) -> Film {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "title": format!("Film {id}"),
            "episode_id": episode,
            "source": source,
            "isModified": modified,
        }))
        .unwrap()
    }

    fn catalog() -> Vec<Film> {
        vec![
            film("c", 6, FilmSource::Api, false),
            film("a", 4, FilmSource::Api, true),
            film("x", 7, FilmSource::Local, false),
            film("b", 5, FilmSource::Api, false),
        ]
    }

    #[test]
    fn test_all_sorted_by_episode() {
        let ids: Vec<_> = filter_films(&catalog(), FilmFilter::All)
            .into_iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c", "x"]);
    }

    #[test]
    fn test_filters_and_counts() {
        let films = catalog();
        assert_eq!(FilmFilter::Api.count(&films), 3);
        assert_eq!(FilmFilter::Local.count(&films), 1);
        assert_eq!(FilmFilter::Modified.count(&films), 1);
        assert_eq!(FilmFilter::All.count(&films), 4);

        let local = filter_films(&films, FilmFilter::Local);
        assert_eq!(local.len(), 1);
        assert_eq!(local[0].id, "x");
    }

    #[test]
    fn test_empty_catalog() {
        assert!(filter_films(&[], FilmFilter::Modified).is_empty());
    }
}
