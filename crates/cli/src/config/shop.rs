//! Shop connection config

use clap::Args;
use scoop::config::{ConfigError, DEFAULT_LOGIN_PATH, StorefrontConfig};

/// Where the shop lives and how to authenticate against it.
#[derive(Debug, Args)]
pub(crate) struct ShopConfig {
    /// Shop base URL
    #[arg(short = 'u', long, env = "SCOOP_BASE_URL", default_value = "http://localhost:5000")]
    pub(crate) base_url: String,

    /// Anti-forgery token, as embedded in the shop's `csrf-token` meta tag
    #[arg(long, env = "SCOOP_CSRF_TOKEN", hide_env_values = true)]
    pub(crate) csrf_token: Option<String>,

    /// Session cookie, e.g. `session=...`, copied from a signed-in browser
    #[arg(long, env = "SCOOP_SESSION_COOKIE", hide_env_values = true)]
    pub(crate) session_cookie: Option<String>,

    /// Path of the shop's login view
    #[arg(long, env = "SCOOP_LOGIN_PATH", default_value = DEFAULT_LOGIN_PATH)]
    pub(crate) login_path: String,
}

impl ShopConfig {
    /// Build the immutable client configuration.
    pub(crate) fn storefront(&self) -> Result<StorefrontConfig, ConfigError> {
        let mut config =
            StorefrontConfig::new(&self.base_url)?.with_login_path(self.login_path.clone());

        if let Some(token) = &self.csrf_token {
            config = config.with_csrf_token(token.clone());
        }

        if let Some(cookie) = &self.session_cookie {
            config = config.with_session_cookie(cookie.clone());
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn shop(base_url: &str) -> ShopConfig {
        ShopConfig {
            base_url: base_url.to_string(),
            csrf_token: Some("token".to_string()),
            session_cookie: None,
            login_path: "/signin".to_string(),
        }
    }

    #[test]
    fn builds_storefront_config() -> TestResult {
        let config = shop("http://localhost:5000").storefront()?;

        assert_eq!(config.login_url(), "http://localhost:5000/signin");
        assert_eq!(config.csrf_token().map(|token| token.as_str()), Some("token"));
        assert!(config.session_cookie().is_none());

        Ok(())
    }

    #[test]
    fn invalid_base_url_is_reported() {
        assert!(shop("not a url").storefront().is_err());
    }
}
