//! Application configuration module
//!
//! All process-wide settings live in [`AppConfig`]. The server builds it once
//! at startup (usually with [`AppConfig::from_env`]) and hands it to the
//! request handlers through the application state, so nothing reads the
//! environment at request time.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default number of posts on one feed page
pub const DEFAULT_POSTS_PER_PAGE: usize = 10;

/// Default lifetime of a cached index page
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(20);

/// Default lifetime of a session token
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Default bcrypt cost for new password hashes (bcrypt's own default)
pub const DEFAULT_PASSWORD_COST: u32 = 12;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// sqlx connection URL of the entity store
    pub database_url: String,
    /// Port the HTTP server binds to
    pub server_port: u16,
    /// Secret used to sign session tokens
    pub jwt_secret: String,
    /// Session token lifetime
    pub session_ttl: Duration,
    /// bcrypt cost of new password hashes, 4..=31
    pub password_cost: u32,
    /// Page size of every feed
    pub posts_per_page: usize,
    /// Lifetime of cached index pages
    pub cache_ttl: Duration,
    /// Directory uploaded images are written to and served from
    pub media_root: PathBuf,
    /// Directory of static assets
    pub static_root: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://yatube.db?mode=rwc".to_string(),
            server_port: 8000,
            jwt_secret: "change-me-in-production".to_string(),
            session_ttl: DEFAULT_SESSION_TTL,
            password_cost: DEFAULT_PASSWORD_COST,
            posts_per_page: DEFAULT_POSTS_PER_PAGE,
            cache_ttl: DEFAULT_CACHE_TTL,
            media_root: PathBuf::from("media"),
            static_root: PathBuf::from("static"),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load the configuration from environment variables
    ///
    /// Unset variables keep their defaults. Variables that are set but do not
    /// parse are reported as [`ConfigError::InvalidValue`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(port) = env_parse::<u16>("SERVER_PORT")? {
            builder = builder.server_port(port);
        }
        match std::env::var("JWT_SECRET") {
            Ok(secret) => builder = builder.jwt_secret(secret),
            Err(_) => tracing::warn!("JWT_SECRET not set, using the development secret"),
        }
        if let Some(days) = env_parse::<u64>("SESSION_TTL_DAYS")? {
            builder = builder.session_ttl(Duration::from_secs(days * 24 * 60 * 60));
        }
        if let Some(cost) = env_parse::<u32>("PASSWORD_COST")? {
            builder = builder.password_cost(cost);
        }
        if let Some(per_page) = env_parse::<usize>("POSTS_PER_PAGE")? {
            builder = builder.posts_per_page(per_page);
        }
        if let Some(secs) = env_parse::<u64>("CACHE_TTL_SECS")? {
            builder = builder.cache_ttl(Duration::from_secs(secs));
        }
        if let Ok(root) = std::env::var("MEDIA_ROOT") {
            builder = builder.media_root(root);
        }
        if let Ok(root) = std::env::var("STATIC_ROOT") {
            builder = builder.static_root(root);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.posts_per_page == 0 {
            return Err(ConfigError::InvalidValue {
                key: "POSTS_PER_PAGE",
                value: "0".to_string(),
            });
        }
        if !(4..=31).contains(&self.password_cost) {
            return Err(ConfigError::InvalidValue {
                key: "PASSWORD_COST",
                value: self.password_cost.to_string(),
            });
        }
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.database_url.is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        Err(_) => Ok(None),
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    database_url: Option<String>,
    server_port: Option<u16>,
    jwt_secret: Option<String>,
    session_ttl: Option<Duration>,
    password_cost: Option<u32>,
    posts_per_page: Option<usize>,
    cache_ttl: Option<Duration>,
    media_root: Option<PathBuf>,
    static_root: Option<PathBuf>,
}

impl AppConfigBuilder {
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = Some(ttl);
        self
    }

    pub fn password_cost(mut self, cost: u32) -> Self {
        self.password_cost = Some(cost);
        self
    }

    pub fn posts_per_page(mut self, per_page: usize) -> Self {
        self.posts_per_page = Some(per_page);
        self
    }

    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    pub fn media_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.media_root = Some(root.into());
        self
    }

    pub fn static_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.static_root = Some(root.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            database_url: self.database_url.unwrap_or(defaults.database_url),
            server_port: self.server_port.unwrap_or(defaults.server_port),
            jwt_secret: self.jwt_secret.unwrap_or(defaults.jwt_secret),
            session_ttl: self.session_ttl.unwrap_or(defaults.session_ttl),
            password_cost: self.password_cost.unwrap_or(defaults.password_cost),
            posts_per_page: self.posts_per_page.unwrap_or(defaults.posts_per_page),
            cache_ttl: self.cache_ttl.unwrap_or(defaults.cache_ttl),
            media_root: self.media_root.unwrap_or(defaults.media_root),
            static_root: self.static_root.unwrap_or(defaults.static_root),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = AppConfig::builder().build().unwrap();
        assert_eq!(config.posts_per_page, DEFAULT_POSTS_PER_PAGE);
        assert_eq!(config.cache_ttl, DEFAULT_CACHE_TTL);
        assert_eq!(config.server_port, 8000);
    }

    #[test]
    fn test_builder_overrides() {
        let config = AppConfig::builder()
            .posts_per_page(3)
            .cache_ttl(Duration::from_secs(1))
            .media_root("/tmp/media")
            .build()
            .unwrap();
        assert_eq!(config.posts_per_page, 3);
        assert_eq!(config.cache_ttl, Duration::from_secs(1));
        assert_eq!(config.media_root, PathBuf::from("/tmp/media"));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = AppConfig::builder().posts_per_page(0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: "POSTS_PER_PAGE", .. })
        ));
    }

    #[test]
    fn test_password_cost_bounds() {
        assert!(AppConfig::builder().password_cost(4).build().is_ok());
        assert!(AppConfig::builder().password_cost(3).build().is_err());
        assert!(AppConfig::builder().password_cost(32).build().is_err());
    }

    #[test]
    fn test_empty_secret_rejected() {
        let result = AppConfig::builder().jwt_secret("").build();
        assert!(matches!(result, Err(ConfigError::MissingValue("JWT_SECRET"))));
    }
}
