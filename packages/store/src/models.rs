//! # Wire models shared by the API gateway and the UI
//!
//! These mirror the JSON documents exchanged with the films REST API. Field names
//! follow the server's mixed conventions (`episode_id` next to `isModified`), so
//! every struct spells out its renames instead of relying on a blanket
//! `rename_all`.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] / [`Role`] | An account and its closed role set. |
//! | [`Film`] / [`FilmSource`] | A stored film record and its provenance. |
//! | [`CreateFilm`] / [`UpdateFilm`] | Request bodies for create and partial update. |
//! | [`LoginRequest`] / [`RegisterRequest`] / [`AuthResponse`] | Authentication payloads. |
//! | [`SyncResult`] | Outcome counters of one sync run. |

use serde::{Deserialize, Serialize};

/// Account role. Only admins may create, edit, delete and sync films.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

/// A registered account as returned by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "displayName", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// Display name, falling back to the username when unset or blank.
    pub fn display_name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Where a film record came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilmSource {
    #[default]
    Api,
    Local,
}

/// A film record stored by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Film {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub episode_id: u32,
    #[serde(default)]
    pub opening_crawl: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub producer: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub characters: Vec<String>,
    #[serde(default)]
    pub planets: Vec<String>,
    #[serde(default)]
    pub starships: Vec<String>,
    #[serde(default)]
    pub vehicles: Vec<String>,
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default)]
    pub source: FilmSource,
    #[serde(rename = "isModified", default)]
    pub is_modified: bool,
    #[serde(rename = "lastSyncDate", default, skip_serializing_if = "Option::is_none")]
    pub last_sync_date: Option<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Body of `POST /starwars/films`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateFilm {
    pub title: String,
    pub episode_id: u32,
    pub opening_crawl: String,
    pub director: String,
    pub producer: String,
    pub release_date: String,
    #[serde(default)]
    pub characters: Vec<String>,
    #[serde(default)]
    pub planets: Vec<String>,
    #[serde(default)]
    pub starships: Vec<String>,
    #[serde(default)]
    pub vehicles: Vec<String>,
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Film> for CreateFilm {
    fn from(film: &Film) -> Self {
        Self {
            title: film.title.clone(),
            episode_id: film.episode_id,
            opening_crawl: film.opening_crawl.clone(),
            director: film.director.clone(),
            producer: film.producer.clone(),
            release_date: film.release_date.clone(),
            characters: film.characters.clone(),
            planets: film.planets.clone(),
            starships: film.starships.clone(),
            vehicles: film.vehicles.clone(),
            species: film.species.clone(),
            description: film.description.clone(),
        }
    }
}

/// Body of `PUT /starwars/films/:id`. Unset fields are left untouched by the server.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateFilm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_crawl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planets: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starships: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<CreateFilm> for UpdateFilm {
    fn from(film: CreateFilm) -> Self {
        Self {
            title: Some(film.title),
            episode_id: Some(film.episode_id),
            opening_crawl: Some(film.opening_crawl),
            director: Some(film.director),
            producer: Some(film.producer),
            release_date: Some(film.release_date),
            characters: Some(film.characters),
            planets: Some(film.planets),
            starships: Some(film.starships),
            vehicles: Some(film.vehicles),
            species: Some(film.species),
            description: film.description,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl RegisterRequest {
    /// Credentials used for the automatic login after registration.
    pub fn credentials(&self) -> LoginRequest {
        LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

/// Response of `POST /users/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
}

/// Counters returned by `POST /starwars/films/sync`.
///
/// `failed > 0` is not an error: the entries in `errors` are warnings shown next
/// to the summary.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncResult {
    #[serde(default)]
    pub message: String,
    pub total: u32,
    pub success: u32,
    pub failed: u32,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_film_uses_server_field_names() {
        let json = r#"{
            "_id": "abc",
            "title": "A New Hope",
            "episode_id": 4,
            "opening_crawl": "It is a period of civil war.",
            "director": "George Lucas",
            "producer": "Gary Kurtz, Rick McCallum",
            "release_date": "1977-05-25",
            "characters": ["1", "2"],
            "source": "local",
            "isModified": true,
            "lastSyncDate": "2024-01-02T10:00:00.000Z"
        }"#;
        let film: Film = serde_json::from_str(json).unwrap();
        assert_eq!(film.id, "abc");
        assert_eq!(film.episode_id, 4);
        assert_eq!(film.characters.len(), 2);
        assert!(film.planets.is_empty());
        assert_eq!(film.source, FilmSource::Local);
        assert!(film.is_modified);
        assert_eq!(film.last_sync_date.as_deref(), Some("2024-01-02T10:00:00.000Z"));
    }

    #[test]
    fn test_user_role_and_display_name() {
        let user: User = serde_json::from_str(
            r#"{"_id":"u1","username":"lukeskywalker","displayName":"Luke","role":"admin"}"#,
        )
        .unwrap();
        assert!(user.is_admin());
        assert_eq!(user.display_name(), "Luke");

        let plain: User =
            serde_json::from_str(r#"{"id":"u2","username":"hansolo1","role":"user"}"#).unwrap();
        assert!(!plain.is_admin());
        assert_eq!(plain.display_name(), "hansolo1");
    }

    #[test]
    fn test_update_film_omits_unset_fields() {
        let patch = UpdateFilm {
            title: Some("Revised".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "Revised" }));
    }

    #[test]
    fn test_register_request_wire_names() {
        let req = RegisterRequest {
            username: "obiwankenobi".to_string(),
            email: "ben@jedi.org".to_string(),
            display_name: "Obi-Wan".to_string(),
            password: "Abc12345!".to_string(),
            confirm_password: "Abc12345!".to_string(),
            role: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["displayName"], "Obi-Wan");
        assert_eq!(json["confirmPassword"], "Abc12345!");
        assert!(json.get("role").is_none());
    }
}
