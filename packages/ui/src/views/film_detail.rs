use api::{ApiClient, Film};
use dioxus::prelude::*;

use super::Loading;
use crate::auth::use_auth;
use crate::dialog::{use_dialogs, DialogRequest};
use crate::film_card::FilmBadges;
use crate::format::format_date;
use crate::navigation::{use_navigation, Destination, NavLink, Navigate};
use crate::page_task::use_page_task;

/// Label and size of each related-resource list.
pub fn film_stats(film: &Film) -> [(&'static str, usize); 5] {
    [
        ("Characters", film.characters.len()),
        ("Planets", film.planets.len()),
        ("Starships", film.starships.len()),
        ("Vehicles", film.vehicles.len()),
        ("Species", film.species.len()),
    ]
}

#[component]
pub fn FilmDetailView(id: String) -> Element {
    let client = use_context::<ApiClient>();
    let auth = use_auth();
    let dialogs = use_dialogs();
    let nav = use_navigation();
    let mut deleting = use_signal(|| false);

    let film = {
        let client = client.clone();
        use_resource(move || {
            let client = client.clone();
            let id = id.clone();
            async move {
                let result = client.get_film(&id).await;
                if let Err(e) = &result {
                    tracing::warn!(film = %id, "failed to load film: {e}");
                    dialogs.show(DialogRequest::error(e.user_message("Could not load the film.")));
                }
                result.ok()
            }
        })
    };

    let delete = use_page_task(move |film: Film| {
        let client = client.clone();
        async move {
            deleting.set(true);
            match client.delete_film(&film.id).await {
                Ok(()) => {
                    tracing::info!(film = %film.id, "film deleted");
                    dialogs.show(DialogRequest::success("Film deleted successfully."));
                    nav.navigate(Destination::Films);
                }
                Err(e) => {
                    deleting.set(false);
                    dialogs.show(DialogRequest::error(
                        e.user_message("Could not delete the film."),
                    ));
                }
            }
        }
    });

    let on_delete = move |film: Film| {
        let delete = delete.clone();
        dialogs.show(
            DialogRequest::confirm(
                format!(
                    "Are you sure you want to delete \"{}\"? This cannot be undone.",
                    film.title
                ),
                move || async move {
                    if !delete.send(film) {
                        tracing::debug!("film page closed before the delete started");
                    }
                    Ok(())
                },
            )
            .title("Confirm deletion")
            .confirm_label("Delete"),
        );
    };

    let Some(loaded) = (*film.read()).clone() else {
        return rsx! { Loading {} };
    };
    let Some(film) = loaded else {
        return rsx! {
            div {
                class: "container",
                NavLink { to: Destination::Films, class: "btn btn-secondary", "Back to films" }
            }
        };
    };

    let released = format_date(&film.release_date);
    let stats = film_stats(&film);
    let last_sync = film.last_sync_date.as_deref().map(format_date);
    let is_admin = auth().is_admin();
    let film_for_delete = film.clone();

    rsx! {
        div {
            class: "container",
            div {
                class: "film-detail",
                div {
                    class: "film-detail-header",
                    div {
                        h1 { "Episode {film.episode_id}: {film.title}" }
                        FilmBadges { source: film.source, is_modified: film.is_modified }
                    }
                    if is_admin {
                        div {
                            class: "film-actions",
                            NavLink {
                                to: Destination::EditFilm(film.id.clone()),
                                class: "btn btn-primary",
                                "Edit"
                            }
                            button {
                                class: "btn btn-danger",
                                disabled: deleting(),
                                onclick: move |_| on_delete(film_for_delete.clone()),
                                if deleting() { "Deleting..." } else { "Delete" }
                            }
                        }
                    }
                }

                div {
                    class: "film-crawl",
                    h2 { "Opening crawl" }
                    p { "{film.opening_crawl}" }
                }

                div {
                    class: "film-info-grid",
                    div { class: "info-card", h3 { "Director" } p { "{film.director}" } }
                    div { class: "info-card", h3 { "Producer(s)" } p { "{film.producer}" } }
                    div { class: "info-card", h3 { "Release date" } p { "{released}" } }
                    div { class: "info-card", h3 { "Episode" } p { "{film.episode_id}" } }
                }

                if let Some(description) = film.description.clone().filter(|d| !d.trim().is_empty()) {
                    div { class: "info-card", h3 { "Description" } p { "{description}" } }
                }

                div {
                    class: "film-stats",
                    for (label, count) in stats {
                        div {
                            key: "{label}",
                            class: "stat-card",
                            strong { "{label}" }
                            span { "{count}" }
                        }
                    }
                }

                if let Some(synced) = last_sync {
                    div { class: "sync-info", small { "Last synced: {synced}" } }
                }

                div {
                    class: "back-link",
                    NavLink { to: Destination::Films, class: "btn btn-secondary", "← Back to films" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_film_stats() {
        let film: Film = serde_json::from_value(serde_json::json!({
            "_id": "1",
            "title": "A New Hope",
            "episode_id": 4,
            "characters": ["c1", "c2", "c3"],
            "planets": ["p1"],
            "species": ["s1", "s2"],
        }))
        .unwrap();

        assert_eq!(
            film_stats(&film),
            [
                ("Characters", 3),
                ("Planets", 1),
                ("Starships", 0),
                ("Vehicles", 0),
                ("Species", 2),
            ]
        );
    }
}
