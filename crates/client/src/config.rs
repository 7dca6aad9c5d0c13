use sheetrec_core::{GetError, GetResult};
use sheetrec_http::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Environment variable holding the bearer token.
pub const ENV_ACCESS_TOKEN: &str = "SHEETS_ACCESS_TOKEN";
/// Environment variable overriding the API endpoint.
pub const ENV_BASE_URL: &str = "SHEETS_API_BASE_URL";
/// Environment variable overriding the request timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "SHEETS_TIMEOUT_SECS";

/// Settings for the HTTP-backed client.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub access_token: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Config for the public Sheets endpoint with the default timeout.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read the config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `GetError::Config` if the token is unset or blank, or the
    /// timeout is not a positive whole number of seconds.
    pub fn from_env() -> GetResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the config through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> GetResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_token = lookup(ENV_ACCESS_TOKEN)
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| GetError::config(format!("{ENV_ACCESS_TOKEN} is not set")))?;

        let mut config = Self::new(access_token);
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout_secs = timeout
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    GetError::config(format!(
                        "{ENV_TIMEOUT_SECS} must be a positive number of seconds, got {timeout:?}"
                    ))
                })?;
        }
        Ok(config)
    }

    /// Use a different API endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Use a different per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

// Keeps the token out of logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
