//! # API crate — the films REST gateway
//!
//! Every network call the client makes goes through [`ApiClient`]. It is the one
//! place that attaches the session token and the one place that reacts to an
//! expired session.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `client` | [`ApiClient`]: one typed method per REST endpoint |
//! | `error` | [`ApiError`] and server message extraction |
//! | `hook` | [`UnauthorizedHook`], fired on any 401 |
//!
//! ## Endpoints
//!
//! | Method | Route |
//! |--------|-------|
//! | `login` | `POST /users/login` |
//! | `register` | `POST /users/register` |
//! | `get_profile` | `GET /users/profile` |
//! | `list_films` | `GET /starwars/films` |
//! | `get_film` | `GET /starwars/films/:id` |
//! | `list_external_films` | `GET /starwars/films/external?fullinfo=` |
//! | `create_film` | `POST /starwars/films` |
//! | `update_film` | `PUT /starwars/films/:id` |
//! | `delete_film` | `DELETE /starwars/films/:id` |
//! | `sync_films` | `POST /starwars/films/sync` |

mod client;
pub mod error;
mod hook;

pub use client::ApiClient;
pub use error::ApiError;
pub use hook::UnauthorizedHook;

pub use store::{
    AuthResponse, CreateFilm, Film, FilmSource, LoginRequest, RegisterRequest, Role, Session,
    SessionHandle, SyncResult, UpdateFilm, User,
};
