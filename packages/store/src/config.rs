//! # Client configuration — `starwars.toml`
//!
//! The web build embeds a TOML file holding the API location, how long the
//! session cookies live, and the dialog/redirect delays. The API base URL can additionally be injected at build time through the
//! `STARWARS_API_URL` environment variable, which wins over the file.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000"
//!
//! [session]
//! expiry_days = 7
//!
//! [timings]
//! dialog_settle_ms = 150
//! confirm_settle_ms = 100
//! redirect_delay_ms = 2000
//! ```
//!
//! Every section and field has a default, so an empty file is the default
//! configuration. The dialog settle gap never drops below 150 ms.

use std::time::Duration;

use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const MIN_DIALOG_SETTLE_MS: u64 = 150;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration stored in `starwars.toml`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub timings: Timings,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SessionConfig {
    /// Lifetime of the `token` and `user` cookies.
    #[serde(default = "default_expiry_days")]
    pub expiry_days: u32,
}

fn default_expiry_days() -> u32 {
    7
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            expiry_days: default_expiry_days(),
        }
    }
}

/// UI delays. Product choices rather than protocol constants.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Timings {
    /// Pause between force-dismissing a dialog and mounting the next one.
    #[serde(default = "default_dialog_settle_ms")]
    pub dialog_settle_ms: u64,
    /// Pause between closing a confirm dialog and running its action.
    #[serde(default = "default_confirm_settle_ms")]
    pub confirm_settle_ms: u64,
    /// How long success/"signing out" dialogs stay up before navigating.
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,
}

fn default_dialog_settle_ms() -> u64 {
    150
}

fn default_confirm_settle_ms() -> u64 {
    100
}

fn default_redirect_delay_ms() -> u64 {
    2000
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            dialog_settle_ms: default_dialog_settle_ms(),
            confirm_settle_ms: default_confirm_settle_ms(),
            redirect_delay_ms: default_redirect_delay_ms(),
        }
    }
}

impl Timings {
    /// Never below 150 ms.
    pub fn dialog_settle(&self) -> Duration {
        Duration::from_millis(self.dialog_settle_ms.max(MIN_DIALOG_SETTLE_MS))
    }

    pub fn confirm_settle(&self) -> Duration {
        Duration::from_millis(self.confirm_settle_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

impl ClientConfig {
    /// Builder method to point the client at another API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Apply the base URL injected at build time, if any.
    pub fn with_build_env(self) -> Self {
        match option_env!("STARWARS_API_URL") {
            Some(url) if !url.trim().is_empty() => self.with_base_url(url.trim()),
            _ => self,
        }
    }

    /// Parse an embedded config, falling back to defaults when it is invalid.
    pub fn load_embedded(source: &str) -> Self {
        Self::from_toml(source).unwrap_or_else(|e| {
            tracing::warn!("{e}; using default configuration");
            Self::default()
        })
    }

    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.session.expiry_days, 7);
        assert_eq!(config.timings.dialog_settle(), Duration::from_millis(150));
        assert_eq!(config.timings.confirm_settle(), Duration::from_millis(100));
        assert_eq!(config.timings.redirect_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_partial_override() {
        let config = ClientConfig::from_toml(
            "[api]\nbase_url = \"https://films.example\"\n\n[timings]\nredirect_delay_ms = 500\n",
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://films.example");
        assert_eq!(config.timings.redirect_delay_ms, 500);
        assert_eq!(config.timings.dialog_settle_ms, 150);
    }

    #[test]
    fn test_invalid_embedded_falls_back() {
        let config = ClientConfig::load_embedded("[timings]\nredirect_delay_ms = \"soon\"");
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_dialog_settle_has_a_floor() {
        let config = ClientConfig::from_toml("[timings]\ndialog_settle_ms = 20\n").unwrap();
        assert_eq!(config.timings.dialog_settle(), Duration::from_millis(150));

        let config = ClientConfig::from_toml("[timings]\ndialog_settle_ms = 400\n").unwrap();
        assert_eq!(config.timings.dialog_settle(), Duration::from_millis(400));
    }
}
