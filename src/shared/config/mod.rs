//! Application configuration module
//!
//! Provides the server configuration: database location, listening port, token
//! signing parameters and password hashing cost. Values are read from
//! environment variables with development defaults.

use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://pizza_delivery.db";
pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_JWT_SECRET: &str = "development-secret-change-in-production";
pub const DEFAULT_JWT_ALGORITHM: &str = "HS256";
/// One hour
pub const DEFAULT_ACCESS_TOKEN_TTL_SECS: i64 = 60 * 60;
/// Thirty days
pub const DEFAULT_REFRESH_TOKEN_TTL_SECS: i64 = 30 * 24 * 60 * 60;
pub const DEFAULT_PASSWORD_HASH_COST: u32 = 12;

const SUPPORTED_ALGORITHMS: [&str; 3] = ["HS256", "HS384", "HS512"];

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// sqlx SQLite connection URL
    pub database_url: String,
    pub max_connections: u32,
    pub server_port: u16,
    /// Shared secret used to sign and verify tokens
    pub jwt_secret: String,
    /// HMAC algorithm name (HS256, HS384 or HS512)
    pub jwt_algorithm: String,
    /// Access token lifetime in seconds
    pub access_token_ttl_secs: i64,
    /// Refresh token lifetime in seconds
    pub refresh_token_ttl_secs: i64,
    /// bcrypt cost factor
    pub password_hash_cost: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            server_port: DEFAULT_SERVER_PORT,
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            jwt_algorithm: DEFAULT_JWT_ALGORITHM.to_string(),
            access_token_ttl_secs: DEFAULT_ACCESS_TOKEN_TTL_SECS,
            refresh_token_ttl_secs: DEFAULT_REFRESH_TOKEN_TTL_SECS,
            password_hash_cost: DEFAULT_PASSWORD_HASH_COST,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Unset keys fall back to their defaults. A missing `JWT_SECRET` is
    /// tolerated with a warning so local development works out of the box.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = AppConfig::builder();

        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(value) = lookup("DATABASE_MAX_CONNECTIONS") {
            builder = builder.max_connections(parse_value("DATABASE_MAX_CONNECTIONS", &value)?);
        }
        if let Some(value) = lookup("SERVER_PORT") {
            builder = builder.server_port(parse_value("SERVER_PORT", &value)?);
        }
        match lookup("JWT_SECRET") {
            Some(secret) => builder = builder.jwt_secret(secret),
            None => tracing::warn!("JWT_SECRET not set, falling back to the development secret"),
        }
        if let Some(algorithm) = lookup("JWT_ALGORITHM") {
            builder = builder.jwt_algorithm(algorithm);
        }
        if let Some(value) = lookup("JWT_ACCESS_TOKEN_EXPIRES") {
            builder = builder.access_token_ttl_secs(parse_value("JWT_ACCESS_TOKEN_EXPIRES", &value)?);
        }
        if let Some(value) = lookup("JWT_REFRESH_TOKEN_EXPIRES") {
            builder = builder.refresh_token_ttl_secs(parse_value("JWT_REFRESH_TOKEN_EXPIRES", &value)?);
        }
        if let Some(value) = lookup("PASSWORD_HASH_COST") {
            builder = builder.password_hash_cost(parse_value("PASSWORD_HASH_COST", &value)?);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::invalid("DATABASE_MAX_CONNECTIONS", "must be at least 1"));
        }
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !SUPPORTED_ALGORITHMS.contains(&self.jwt_algorithm.as_str()) {
            return Err(ConfigError::UnsupportedAlgorithm(self.jwt_algorithm.clone()));
        }
        if self.access_token_ttl_secs <= 0 {
            return Err(ConfigError::invalid("JWT_ACCESS_TOKEN_EXPIRES", "must be positive"));
        }
        if self.refresh_token_ttl_secs <= 0 {
            return Err(ConfigError::invalid("JWT_REFRESH_TOKEN_EXPIRES", "must be positive"));
        }
        if !(4..=31).contains(&self.password_hash_cost) {
            return Err(ConfigError::invalid("PASSWORD_HASH_COST", "must be between 4 and 31"));
        }
        Ok(())
    }

    /// Whether the database lives only in memory
    pub fn is_in_memory_database(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::invalid(key, format!("cannot parse '{}'", value)))
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    database_url: Option<String>,
    max_connections: Option<u32>,
    server_port: Option<u16>,
    jwt_secret: Option<String>,
    jwt_algorithm: Option<String>,
    access_token_ttl_secs: Option<i64>,
    refresh_token_ttl_secs: Option<i64>,
    password_hash_cost: Option<u32>,
}

impl AppConfigBuilder {
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = Some(max_connections);
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

    pub fn jwt_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.jwt_algorithm = Some(algorithm.into().trim().to_ascii_uppercase());
        self
    }

    pub fn access_token_ttl_secs(mut self, secs: i64) -> Self {
        self.access_token_ttl_secs = Some(secs);
        self
    }

    pub fn refresh_token_ttl_secs(mut self, secs: i64) -> Self {
        self.refresh_token_ttl_secs = Some(secs);
        self
    }

    pub fn password_hash_cost(mut self, cost: u32) -> Self {
        self.password_hash_cost = Some(cost);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            database_url: self.database_url.unwrap_or(defaults.database_url),
            max_connections: self.max_connections.unwrap_or(defaults.max_connections),
            server_port: self.server_port.unwrap_or(defaults.server_port),
            jwt_secret: self.jwt_secret.unwrap_or(defaults.jwt_secret),
            jwt_algorithm: self.jwt_algorithm.unwrap_or(defaults.jwt_algorithm),
            access_token_ttl_secs: self.access_token_ttl_secs.unwrap_or(defaults.access_token_ttl_secs),
            refresh_token_ttl_secs: self.refresh_token_ttl_secs.unwrap_or(defaults.refresh_token_ttl_secs),
            password_hash_cost: self.password_hash_cost.unwrap_or(defaults.password_hash_cost),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
    #[error("unsupported signing algorithm: {0} (expected HS256, HS384 or HS512)")]
    UnsupportedAlgorithm(String),
}

impl ConfigError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            reason: reason.into(),
        }
    }
}
