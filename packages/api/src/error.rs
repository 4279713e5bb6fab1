//! Failure taxonomy of the API gateway.

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP 401 from any endpoint. The session has already been cleared and the
    /// unauthorized hook fired by the time the caller sees this.
    #[error("{}", unauthorized_message(.message))]
    Unauthorized { message: Option<String> },

    /// Any other non-2xx response.
    #[error("{}", status_message(.status, .message))]
    Status { status: u16, message: Option<String> },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

fn unauthorized_message(message: &Option<String>) -> String {
    message
        .clone()
        .unwrap_or_else(|| "session expired, please sign in again".to_string())
}

fn status_message(status: &u16, message: &Option<String>) -> String {
    message
        .clone()
        .unwrap_or_else(|| format!("request failed with status {status}"))
}

impl ApiError {
    /// Message to show the user: the server's own message when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Unauthorized { message: Some(m) } | ApiError::Status { message: Some(m), .. } => {
                m.clone()
            }
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// Understands `{"message": "..."}`, validation-style `{"message": ["a", "b"]}`
/// and `{"error": "..."}`. Plain-text bodies are used as-is.
pub fn extract_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return Some(body.to_string());
    };
    match json.get("message") {
        Some(Value::String(m)) if !m.is_empty() => return Some(m.clone()),
        Some(Value::Array(items)) => {
            let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            if !parts.is_empty() {
                return Some(parts.join(", "));
            }
        }
        _ => {}
    }
    json.get("error")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
