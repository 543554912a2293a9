use std::env;
use std::fmt;
use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";
pub const POSTER_SIZE: &str = "w500";
pub const LANGUAGE: &str = "en-US";

pub const TOKEN_VAR: &str = "TMDB_BEARER_TOKEN";
pub const API_BASE_VAR: &str = "TMDB_API_BASE";
pub const IMAGE_BASE_VAR: &str = "TMDB_IMAGE_BASE";
pub const TIMEOUT_VAR: &str = "TMDB_TIMEOUT_SECS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TMDB_BEARER_TOKEN is not set")]
    MissingToken,
    #[error("{var} is not a valid URL ({value}): {reason}")]
    InvalidUrl {
        var: &'static str,
        value: String,
        reason: String,
    },
    #[error("TMDB_TIMEOUT_SECS must be a positive number of seconds, got '{0}'")]
    InvalidTimeout(String),
}

/// Connection settings for the movie database.
///
/// Built once at startup and shared read-only afterwards. Fields are private
/// so nothing can alter them once the client exists.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    api_base: String,
    image_base: String,
    bearer_token: String,
    request_timeout: Option<Duration>,
}

impl ApiConfig {
    pub fn new(bearer_token: impl Into<String>) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            bearer_token: normalize_token(&bearer_token.into()),
            request_timeout: None,
        }
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_image_base(mut self, base: impl Into<String>) -> Self {
        self.image_base = base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`] but with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_VAR)
            .map(|t| normalize_token(&t))
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;
        let mut config = ApiConfig::new(token);

        if let Some(base) = non_empty(lookup(API_BASE_VAR)) {
            validate_url(API_BASE_VAR, &base)?;
            config = config.with_api_base(base);
        }
        if let Some(base) = non_empty(lookup(IMAGE_BASE_VAR)) {
            validate_url(IMAGE_BASE_VAR, &base)?;
            config = config.with_image_base(base);
        }
        if let Some(raw) = non_empty(lookup(TIMEOUT_VAR)) {
            let secs = raw
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.clone()))?;
            config = config.with_request_timeout(Some(Duration::from_secs(secs)));
        }

        Ok(config)
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn image_base(&self) -> &str {
        &self.image_base
    }

    pub fn bearer_token(&self) -> &str {
        &self.bearer_token
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_base", &self.api_base)
            .field("image_base", &self.image_base)
            .field("bearer_token", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

// The token is often pasted straight from the TMDB dashboard with its scheme.
fn normalize_token(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix("Bearer ")
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn validate_url(var: &'static str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidUrl {
            var,
            value: value.to_string(),
            reason: e.to_string(),
        })
}
