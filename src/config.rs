//! Storefront configuration
//!
//! Everything the client needs from its surroundings is captured once, at startup, in an
//! immutable [`StorefrontConfig`].

use std::fmt;

use reqwest::Url;
use thiserror::Error;

/// Request header carrying the anti-forgery token.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Name of the page metadata tag the anti-forgery token is embedded in.
pub const CSRF_META_NAME: &str = "csrf-token";

/// Login view the storefront redirects to when the session has expired.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL could not be parsed
    #[error("invalid base url '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected value
        url: String,

        /// Why it was rejected
        reason: String,
    },

    /// An endpoint path could not be joined onto the base URL
    #[error("invalid endpoint path '{0}'")]
    InvalidPath(String),
}

/// Anti-forgery token sent with every mutating request.
#[derive(Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    /// Wraps a token value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw token value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CsrfToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CsrfToken(<redacted>)")
    }
}

/// Immutable client configuration.
#[derive(Clone)]
pub struct StorefrontConfig {
    base_url: Url,
    csrf_token: Option<CsrfToken>,
    session_cookie: Option<String>,
    login_path: String,
}

impl StorefrontConfig {
    /// Creates a configuration for the shop at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] unless `base_url` is an absolute `http` or `https`
    /// URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let mut parsed = Url::parse(base_url).map_err(|error| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: error.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        // Relative joins replace the last path segment unless the path is a directory.
        if !parsed.path().ends_with('/') {
            let path = format!("{}/", parsed.path());
            parsed.set_path(&path);
        }

        Ok(Self {
            base_url: parsed,
            csrf_token: None,
            session_cookie: None,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        })
    }

    /// Sets the anti-forgery token. Empty values are ignored.
    #[must_use]
    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.csrf_token = (!token.is_empty()).then(|| CsrfToken::new(token));
        self
    }

    /// Sets a session cookie to send with every request.
    ///
    /// Browsers attach the session cookie themselves; only headless clients need this.
    #[must_use]
    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        let cookie = cookie.into();
        self.session_cookie = (!cookie.is_empty()).then_some(cookie);
        self
    }

    /// Overrides the login view path.
    #[must_use]
    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    /// Shop base URL, always ending in `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Anti-forgery token, if one was found.
    pub fn csrf_token(&self) -> Option<&CsrfToken> {
        self.csrf_token.as_ref()
    }

    /// Session cookie for headless clients.
    pub fn session_cookie(&self) -> Option<&str> {
        self.session_cookie.as_deref()
    }

    /// Resolve an API path against the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPath`] if the joined URL is invalid.
    pub fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|error| ConfigError::InvalidPath(format!("{path}: {error}")))
    }

    /// Absolute URL of the login view.
    pub fn login_url(&self) -> String {
        self.endpoint(&self.login_path).map_or_else(
            |_error| self.login_path.clone(),
            |url| url.to_string(),
        )
    }
}

impl fmt::Debug for StorefrontConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorefrontConfig")
            .field("base_url", &self.base_url.as_str())
            .field("csrf_token", &self.csrf_token)
            .field(
                "session_cookie",
                &self.session_cookie.as_ref().map(|_cookie| "<redacted>"),
            )
            .field("login_path", &self.login_path)
            .finish()
    }
}
