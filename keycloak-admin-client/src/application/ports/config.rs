use crate::domain::errors::{AdminResult, ConfigError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Admin client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Keycloak server root, e.g. `https://sso.example.com`
    pub base_url: String,
    pub timeout_seconds: u64,
    pub connect_timeout_seconds: u64,
    pub verify_ssl: bool,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_seconds: 30,
            connect_timeout_seconds: 10,
            verify_ssl: true,
            user_agent: format!("keycloak-admin-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> AdminResult<()> {
        if self.base_url.is_empty() {
            return Err(ConfigError::MissingRequired {
                key: "KEYCLOAK_URL".to_string(),
            }
            .into());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                key: "KEYCLOAK_URL".to_string(),
                message: "Must start with http:// or https://".to_string(),
            }
            .into());
        }

        if self.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                key: "timeout_seconds".to_string(),
                message: "Must be greater than 0".to_string(),
            }
            .into());
        }

        if self.connect_timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                key: "connect_timeout_seconds".to_string(),
                message: "Must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(())
    }

    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn get_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn get_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> AdminResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup (environment, file, test map)
    pub fn from_lookup<F>(lookup: F) -> AdminResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = ClientConfig {
            base_url: lookup("KEYCLOAK_URL").ok_or_else(|| ConfigError::MissingRequired {
                key: "KEYCLOAK_URL".to_string(),
            })?,
            timeout_seconds: parse_or("HTTP_TIMEOUT_SECONDS", &lookup, defaults.timeout_seconds)?,
            connect_timeout_seconds: parse_or(
                "HTTP_CONNECT_TIMEOUT_SECONDS",
                &lookup,
                defaults.connect_timeout_seconds,
            )?,
            verify_ssl: parse_or("KEYCLOAK_VERIFY_SSL", &lookup, defaults.verify_ssl)?,
            user_agent: lookup("HTTP_USER_AGENT").unwrap_or(defaults.user_agent),
        };

        config.validate()?;
        Ok(config)
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> AdminResult<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| {
            ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("Cannot parse '{raw}'"),
            }
            .into()
        }),
        None => Ok(default),
    }
}
