//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string
/// - `SECRET_KEY` (required): HMAC secret used to both sign and verify tokens
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `DB_MAX_CONNECTIONS` (optional): pool size, defaults to 5
#[derive(Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    pub secret_key: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_max_connections")]
    pub db_max_connections: u32,
}

// Keeps the secret and credentials in the connection string out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"<redacted>")
            .field("secret_key", &"<redacted>")
            .field("server_port", &self.server_port)
            .field("db_max_connections", &self.db_max_connections)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read environment: {0}")]
    Env(#[from] envy::Error),

    #[error("SECRET_KEY must not be empty")]
    EmptySecret,
}

fn default_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is loaded first if present.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (e.g., DATABASE_URL)
    /// - Environment variable values cannot be parsed into expected types
    /// - `SECRET_KEY` is empty
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(std::env::vars())
    }

    /// Build a config from arbitrary key/value pairs, as read from the environment.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)?;
        if config.secret_key.is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn applies_defaults() {
        let config = Config::from_vars(vars(&[
            ("DATABASE_URL", "postgres://localhost/accounts"),
            ("SECRET_KEY", "s3cret"),
        ]))
        .unwrap();

        assert_eq!(config.server_port, 3000);
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.secret_key, "s3cret");
    }

    #[test]
    fn rejects_empty_secret() {
        let err = Config::from_vars(vars(&[
            ("DATABASE_URL", "postgres://localhost/accounts"),
            ("SECRET_KEY", ""),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::EmptySecret));
    }

    #[test]
    fn requires_database_url() {
        let err = Config::from_vars(vars(&[("SECRET_KEY", "s3cret")])).unwrap_err();
        assert!(matches!(err, ConfigError::Env(_)));
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let config = Config::from_vars(vars(&[
            ("DATABASE_URL", "postgres://user:pw@localhost/accounts"),
            ("SECRET_KEY", "s3cret"),
        ]))
        .unwrap();

        let rendered = format!("{config:?}");
        assert!(!rendered.contains("s3cret"));
        assert!(!rendered.contains("pw@"));
    }
}
