use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use store::{
    AuthResponse, CreateFilm, Film, LoginRequest, RegisterRequest, SessionHandle, SyncResult,
    UpdateFilm, User,
};

use crate::error::{extract_message, ApiError};
use crate::hook::UnauthorizedHook;

/// The single outbound HTTP client.
///
/// Every request carries `Authorization: Bearer <token>` while the session holds
/// a token. A 401 from any endpoint clears the session and fires the
/// [`UnauthorizedHook`] before the error reaches the caller. No retries, no
/// caching: one call, one request.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionHandle,
    unauthorized: UnauthorizedHook,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionHandle) -> Self {
        let unauthorized = UnauthorizedHook::new();
        {
            let session = session.clone();
            unauthorized.subscribe(move || session.clear());
        }
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
            unauthorized,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    /// Run `listener` after the session has been cleared by a 401.
    pub fn on_unauthorized(&self, listener: impl Fn() + 'static) {
        self.unauthorized.subscribe(listener);
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.send_json(Method::POST, "/users/login", credentials).await
    }

    pub async fn register(&self, registration: &RegisterRequest) -> Result<User, ApiError> {
        self.send_json(Method::POST, "/users/register", registration)
            .await
    }

    pub async fn get_profile(&self) -> Result<User, ApiError> {
        self.fetch(Method::GET, "/users/profile").await
    }

    pub async fn list_films(&self) -> Result<Vec<Film>, ApiError> {
        self.fetch(Method::GET, "/starwars/films").await
    }

    pub async fn get_film(&self, id: &str) -> Result<Film, ApiError> {
        self.fetch(Method::GET, &format!("/starwars/films/{id}"))
            .await
    }

    /// Films straight from the external provider, in the provider's own shape.
    pub async fn list_external_films(&self, fullinfo: bool) -> Result<Value, ApiError> {
        self.fetch(
            Method::GET,
            &format!("/starwars/films/external?fullinfo={fullinfo}"),
        )
        .await
    }

    pub async fn create_film(&self, film: &CreateFilm) -> Result<Film, ApiError> {
        self.send_json(Method::POST, "/starwars/films", film).await
    }

    pub async fn update_film(&self, id: &str, changes: &UpdateFilm) -> Result<Film, ApiError> {
        self.send_json(Method::PUT, &format!("/starwars/films/{id}"), changes)
            .await
    }

    pub async fn delete_film(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/starwars/films/{id}");
        self.execute(self.request(Method::DELETE, &path), &path)
            .await?;
        Ok(())
    }

    pub async fn sync_films(&self) -> Result<SyncResult, ApiError> {
        self.fetch(Method::POST, "/starwars/films/sync").await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.http.request(method, format!("{}{path}", self.base_url));
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, method: Method, path: &str) -> Result<T, ApiError> {
        let response = self.execute(self.request(method, path), path).await?;
        Ok(response.json::<T>().await?)
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .execute(self.request(method, path).json(body), path)
            .await?;
        Ok(response.json::<T>().await?)
    }

    async fn execute(&self, request: RequestBuilder, path: &str) -> Result<Response, ApiError> {
        tracing::debug!(path, "api request");
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_message(&body);
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(path, "request unauthorized, ending session");
            self.unauthorized.emit();
            return Err(ApiError::Unauthorized { message });
        }

        tracing::debug!(path, status = status.as_u16(), "api request failed");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}
