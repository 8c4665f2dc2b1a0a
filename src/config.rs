//! Client configuration.
//!
//! This module handles loading configuration from environment variables,
//! with validation to ensure all required values are present.

use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::FreshError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retries after the first attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default wait before retrying when the server gives no hint (seconds).
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 3;

/// Credentials sent as HTTP Basic auth.
///
/// An API key is sent as the username with the literal password `X`.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// API key authentication.
    /// SECURITY: Never log this value!
    ApiKey(String),

    /// Username and password authentication.
    Basic {
        /// Account username (usually the agent email).
        username: String,
        /// Account password.
        /// SECURITY: Never log this value!
        password: String,
    },
}

impl Credentials {
    /// Returns the secret part of the credential, for log sanitization only.
    pub(crate) fn secret(&self) -> &str {
        match self {
            Credentials::ApiKey(key) => key,
            Credentials::Basic { password, .. } => password,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::ApiKey(_) => f.write_str("ApiKey([REDACTED])"),
            Credentials::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
        }
    }
}

/// Configuration for connecting to a Freshdesk or Freshservice account.
#[derive(Debug, Clone)]
pub struct Config {
    /// Account domain, e.g. `acme.freshdesk.com`.
    ///
    /// A value with an explicit `http://` or `https://` scheme is used as-is,
    /// which lets tests point the client at a local server.
    pub domain: String,

    /// Credentials for every authenticated call.
    pub credentials: Credentials,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Number of retries after the first attempt. Zero disables retrying.
    pub max_retries: u32,

    /// Wait before retrying when the server gives no `Retry-After` hint.
    pub retry_after: Duration,
}

impl Config {
    /// Creates a configuration with default timeout and retry settings.
    pub fn new(domain: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            domain: domain.into(),
            credentials,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_after: Duration::from_secs(DEFAULT_RETRY_AFTER_SECS),
        }
    }

    /// Creates a configuration authenticated by API key.
    pub fn with_api_key(domain: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::new(domain, Credentials::ApiKey(api_key.into()))
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the retry budget.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the default wait between retries.
    pub fn retry_after(mut self, retry_after: Duration) -> Self {
        self.retry_after = retry_after;
        self
    }

    /// Returns the API base URL, `https://{domain}/api/v2`.
    pub fn base_url(&self) -> String {
        let domain = self.domain.trim_end_matches('/');
        if domain.starts_with("http://") || domain.starts_with("https://") {
            format!("{}/api/v2", domain)
        } else {
            format!("https://{}/api/v2", domain)
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `FRESH_DOMAIN` (required): account domain
    /// - `FRESH_API_KEY`, or `FRESH_USERNAME` and `FRESH_PASSWORD`; the API key
    ///   wins when both are present
    /// - `FRESH_TIMEOUT_SECS` (default 30)
    /// - `FRESH_MAX_RETRIES` (default 3, negative values disable retrying)
    /// - `FRESH_RETRY_AFTER_SECS` (default 3)
    ///
    /// # Errors
    ///
    /// Returns `FreshError::Config` if a required variable is missing or a
    /// value fails validation.
    ///
    /// # Example
    ///
    /// ```ignore
    /// dotenvy::dotenv().ok();
    /// let config = Config::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self, FreshError> {
        let domain = Self::validate_domain(Self::get_required_env("FRESH_DOMAIN")?)?;

        let credentials = match Self::get_optional_env("FRESH_API_KEY") {
            Some(key) => {
                Self::validate_api_key(&key)?;
                Credentials::ApiKey(key)
            }
            None => Credentials::Basic {
                username: Self::get_required_env("FRESH_USERNAME")?,
                password: Self::get_required_env("FRESH_PASSWORD")?,
            },
        };

        let mut config = Config::new(domain, credentials);

        if let Some(secs) = Self::get_optional_env("FRESH_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(Self::parse_u64("FRESH_TIMEOUT_SECS", &secs)?);
        }
        if let Some(n) = Self::get_optional_env("FRESH_MAX_RETRIES") {
            config.max_retries = Self::parse_max_retries(&n)?;
        }
        if let Some(secs) = Self::get_optional_env("FRESH_RETRY_AFTER_SECS") {
            config.retry_after =
                Duration::from_secs(Self::parse_u64("FRESH_RETRY_AFTER_SECS", &secs)?);
        }

        Ok(config)
    }

    /// Gets a required environment variable, returning an error if missing or empty.
    fn get_required_env(name: &str) -> Result<String, FreshError> {
        Self::get_optional_env(name).ok_or_else(|| FreshError::missing_env(name))
    }

    fn get_optional_env(name: &str) -> Option<String> {
        env::var(name)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn parse_u64(name: &str, value: &str) -> Result<u64, FreshError> {
        value.parse::<u64>().map_err(|_| {
            FreshError::invalid_config(format!("{} must be a non-negative integer", name))
        })
    }

    /// Negative retry counts mean "no retries".
    fn parse_max_retries(value: &str) -> Result<u32, FreshError> {
        let n = value.parse::<i64>().map_err(|_| {
            FreshError::invalid_config("FRESH_MAX_RETRIES must be an integer")
        })?;
        Ok(u32::try_from(n.max(0)).unwrap_or(u32::MAX))
    }

    /// Validates and normalizes the domain.
    fn validate_domain(domain: String) -> Result<String, FreshError> {
        let domain = domain.trim().trim_end_matches('/').to_string();

        if domain.is_empty() || domain.contains(char::is_whitespace) {
            return Err(FreshError::invalid_config(
                "FRESH_DOMAIN must be a host name such as acme.freshdesk.com",
            ));
        }

        Ok(domain)
    }

    /// Validates the API key is not a placeholder value.
    fn validate_api_key(key: &str) -> Result<(), FreshError> {
        let key_lower = key.to_lowercase();
        let placeholder_patterns = ["your_api_key", "your_key", "placeholder", "changeme"];

        for pattern in placeholder_patterns {
            if key_lower.contains(pattern) {
                return Err(FreshError::invalid_config(
                    "FRESH_API_KEY appears to be a placeholder value",
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_from_domain() {
        let config = Config::with_api_key("acme.freshdesk.com", "k");
        assert_eq!(config.base_url(), "https://acme.freshdesk.com/api/v2");
    }

    #[test]
    fn test_base_url_keeps_explicit_scheme() {
        let config = Config::with_api_key("http://127.0.0.1:8080/", "k");
        assert_eq!(config.base_url(), "http://127.0.0.1:8080/api/v2");
    }

    #[test]
    fn test_defaults() {
        let config = Config::with_api_key("acme.freshdesk.com", "k");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_after, Duration::from_secs(3));
    }

    #[test]
    fn test_validate_domain_trims_trailing_slash() {
        let result = Config::validate_domain("acme.freshservice.com/".to_string()).unwrap();
        assert_eq!(result, "acme.freshservice.com");
    }

    #[test]
    fn test_validate_domain_rejects_whitespace() {
        assert!(Config::validate_domain("acme freshdesk.com".to_string()).is_err());
    }

    #[test]
    fn test_parse_max_retries_clamps_negative() {
        assert_eq!(Config::parse_max_retries("-2").unwrap(), 0);
        assert_eq!(Config::parse_max_retries("5").unwrap(), 5);
        assert!(Config::parse_max_retries("five").is_err());
    }

    #[test]
    fn test_validate_api_key_rejects_placeholder() {
        assert!(Config::validate_api_key("your_api_key_here").is_err());
        assert!(Config::validate_api_key("abc123def456").is_ok());
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let creds = Credentials::Basic {
            username: "agent@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let shown = format!("{:?}", creds);
        assert!(shown.contains("agent@example.com"));
        assert!(!shown.contains("hunter2"));
        assert!(!format!("{:?}", Credentials::ApiKey("k3y".to_string())).contains("k3y"));
    }
}
