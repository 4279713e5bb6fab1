use api::{ApiClient, CreateFilm, Film, UpdateFilm};
use dioxus::prelude::*;

use super::Loading;
use crate::dialog::{use_dialogs, DialogRequest};
use crate::navigation::{use_navigation, Destination, NavLink, Navigate};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Episode must be a positive whole number")]
    InvalidEpisode,
}

/// Raw text of every input. List fields hold one identifier per line.
#[derive(Debug, Clone, PartialEq)]
pub struct FilmForm {
    pub title: String,
    pub episode: String,
    pub opening_crawl: String,
    pub director: String,
    pub producer: String,
    pub release_date: String,
    pub characters: String,
    pub planets: String,
    pub starships: String,
    pub vehicles: String,
    pub species: String,
    pub description: String,
}

impl Default for FilmForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            episode: "1".to_string(),
            opening_crawl: String::new(),
            director: String::new(),
            producer: String::new(),
            release_date: String::new(),
            characters: String::new(),
            planets: String::new(),
            starships: String::new(),
            vehicles: String::new(),
            species: String::new(),
            description: String::new(),
        }
    }
}

/// Split a textarea into trimmed, non-empty lines.
pub fn parse_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

impl FilmForm {
    pub fn from_film(film: &Film) -> Self {
        Self {
            title: film.title.clone(),
            episode: film.episode_id.to_string(),
            opening_crawl: film.opening_crawl.clone(),
            director: film.director.clone(),
            producer: film.producer.clone(),
            release_date: film.release_date.clone(),
            characters: film.characters.join("\n"),
            planets: film.planets.join("\n"),
            starships: film.starships.join("\n"),
            vehicles: film.vehicles.join("\n"),
            species: film.species.join("\n"),
            description: film.description.clone().unwrap_or_default(),
        }
    }

    pub fn to_request(&self) -> Result<CreateFilm, FormError> {
        let required = [
            ("Title", &self.title),
            ("Opening crawl", &self.opening_crawl),
            ("Director", &self.director),
            ("Producer", &self.producer),
            ("Release date", &self.release_date),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(FormError::Required(field));
            }
        }
        let episode_id = match self.episode.trim().parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => return Err(FormError::InvalidEpisode),
        };
        let description = self.description.trim();

        Ok(CreateFilm {
            title: self.title.trim().to_string(),
            episode_id,
            opening_crawl: self.opening_crawl.clone(),
            director: self.director.trim().to_string(),
            producer: self.producer.trim().to_string(),
            release_date: self.release_date.trim().to_string(),
            characters: parse_list(&self.characters),
            planets: parse_list(&self.planets),
            starships: parse_list(&self.starships),
            vehicles: parse_list(&self.vehicles),
            species: parse_list(&self.species),
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

/// Create form when `id` is `None`, edit form otherwise.
#[component]
pub fn FilmFormView(#[props(!optional)] id: Option<String>) -> Element {
    let client = use_context::<ApiClient>();
    let dialogs = use_dialogs();
    let nav = use_navigation();
    let mut form = use_signal(FilmForm::default);
    let mut loading = use_signal(|| id.is_some());
    let mut saving = use_signal(|| false);
    let is_edit = id.is_some();

    let _loader = {
        let client = client.clone();
        let id = id.clone();
        use_resource(move || {
            let client = client.clone();
            let id = id.clone();
            async move {
                let Some(id) = id else { return };
                match client.get_film(&id).await {
                    Ok(film) => form.set(FilmForm::from_film(&film)),
                    Err(e) => {
                        tracing::warn!(film = %id, "failed to load film for editing: {e}");
                        dialogs.show(DialogRequest::error(e.user_message("Could not load the film.")));
                    }
                }
                loading.set(false);
            }
        })
    };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        let request = match form.read().to_request() {
            Ok(request) => request,
            Err(e) => {
                dialogs.show(DialogRequest::error(e.to_string()).title("Invalid film"));
                return;
            }
        };
        let client = client.clone();
        let id = id.clone();
        saving.set(true);
        spawn(async move {
            let result = match id.as_deref() {
                Some(id) => client
                    .update_film(id, &UpdateFilm::from(request))
                    .await
                    .map(|_| "Film updated successfully."),
                None => client
                    .create_film(&request)
                    .await
                    .map(|_| "Film created successfully."),
            };
            saving.set(false);
            match result {
                Ok(message) => {
                    tracing::info!("{message}");
                    dialogs.show(DialogRequest::success(message));
                    nav.navigate(Destination::Films);
                }
                Err(e) => {
                    tracing::warn!("failed to save film: {e}");
                    dialogs.show(DialogRequest::error(e.user_message("Could not save the film.")));
                }
            }
        });
    };

    if loading() {
        return rsx! { Loading {} };
    }

    let busy = saving();

    rsx! {
        div {
            class: "container",
            div {
                class: "form-container",
                h1 { if is_edit { "Edit Film" } else { "New Film" } }

                form {
                    class: "film-form",
                    onsubmit,

                    div {
                        class: "form-row",
                        div {
                            class: "form-group",
                            label { r#for: "title", "Title *" }
                            input {
                                id: "title",
                                r#type: "text",
                                required: true,
                                disabled: busy,
                                value: "{form.read().title}",
                                oninput: move |evt: FormEvent| form.write().title = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "episode", "Episode *" }
                            input {
                                id: "episode",
                                r#type: "number",
                                min: "1",
                                required: true,
                                disabled: busy,
                                value: "{form.read().episode}",
                                oninput: move |evt: FormEvent| form.write().episode = evt.value(),
                            }
                        }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "opening_crawl", "Opening crawl *" }
                        textarea {
                            id: "opening_crawl",
                            rows: "5",
                            required: true,
                            disabled: busy,
                            value: "{form.read().opening_crawl}",
                            oninput: move |evt: FormEvent| form.write().opening_crawl = evt.value(),
                        }
                    }

                    div {
                        class: "form-row",
                        div {
                            class: "form-group",
                            label { r#for: "director", "Director *" }
                            input {
                                id: "director",
                                r#type: "text",
                                required: true,
                                disabled: busy,
                                value: "{form.read().director}",
                                oninput: move |evt: FormEvent| form.write().director = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "producer", "Producer *" }
                            input {
                                id: "producer",
                                r#type: "text",
                                required: true,
                                disabled: busy,
                                value: "{form.read().producer}",
                                oninput: move |evt: FormEvent| form.write().producer = evt.value(),
                            }
                        }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "release_date", "Release date *" }
                        input {
                            id: "release_date",
                            r#type: "date",
                            required: true,
                            disabled: busy,
                            value: "{form.read().release_date}",
                            oninput: move |evt: FormEvent| form.write().release_date = evt.value(),
                        }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "description", "Description" }
                        textarea {
                            id: "description",
                            rows: "3",
                            disabled: busy,
                            value: "{form.read().description}",
                            oninput: move |evt: FormEvent| form.write().description = evt.value(),
                        }
                    }

                    h3 { class: "form-section", "Related resources (one per line)" }
                    div {
                        class: "form-row",
                        div {
                            class: "form-group",
                            label { r#for: "characters", "Characters" }
                            textarea {
                                id: "characters",
                                rows: "4",
                                disabled: busy,
                                value: "{form.read().characters}",
                                oninput: move |evt: FormEvent| form.write().characters = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "planets", "Planets" }
                            textarea {
                                id: "planets",
                                rows: "4",
                                disabled: busy,
                                value: "{form.read().planets}",
                                oninput: move |evt: FormEvent| form.write().planets = evt.value(),
                            }
                        }
                    }
                    div {
                        class: "form-row",
                        div {
                            class: "form-group",
                            label { r#for: "starships", "Starships" }
                            textarea {
                                id: "starships",
                                rows: "4",
                                disabled: busy,
                                value: "{form.read().starships}",
                                oninput: move |evt: FormEvent| form.write().starships = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "vehicles", "Vehicles" }
                            textarea {
                                id: "vehicles",
                                rows: "4",
                                disabled: busy,
                                value: "{form.read().vehicles}",
                                oninput: move |evt: FormEvent| form.write().vehicles = evt.value(),
                            }
                        }
                    }
                    div {
                        class: "form-group",
                        label { r#for: "species", "Species" }
                        textarea {
                            id: "species",
                            rows: "4",
                            disabled: busy,
                            value: "{form.read().species}",
                            oninput: move |evt: FormEvent| form.write().species = evt.value(),
                        }
                    }

                    div {
                        class: "form-actions",
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: busy,
                            if busy { "Saving..." } else if is_edit { "Update" } else { "Create" }
                        }
                        NavLink { to: Destination::Films, class: "btn btn-secondary", "Cancel" }
                    }
                }
            }
        }
    }
}
