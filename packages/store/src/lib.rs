pub mod config;
pub mod cookies;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryJar;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod document;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use document::DocumentJar;

pub use config::{ClientConfig, ConfigError};
pub use cookies::{CookieJar, CookieOptions};
pub use models::{
    AuthResponse, CreateFilm, Film, FilmSource, LoginRequest, RegisterRequest, Role, SyncResult,
    UpdateFilm, User,
};
pub use session::{Session, SessionHandle, SessionStore, TOKEN_COOKIE, USER_COOKIE};
