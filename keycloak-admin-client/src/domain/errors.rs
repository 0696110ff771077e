use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by admin API operations
#[derive(Error, Debug)]
pub enum AdminError {
    /// The HTTP exchange could not complete (DNS, connect, timeout, body read).
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server answered with a status other than the one the operation expects.
    /// `body` is the response payload exactly as the server sent it.
    #[error("Remote API error: status {status} - {body}")]
    RemoteApi { status: u16, body: Value },

    #[error("Created resource location missing from response (status {status})")]
    MissingLocation { status: u16 },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Result type for admin operations
pub type AdminResult<T> = Result<T, AdminError>;

impl AdminError {
    pub fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        AdminError::Transport(Box::new(err))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, AdminError::Transport(_))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, AdminError::RemoteApi { .. })
    }

    /// Status code of a remote API failure
    pub fn status(&self) -> Option<u16> {
        match self {
            AdminError::RemoteApi { status, .. } => Some(*status),
            AdminError::MissingLocation { status } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body of a remote API failure
    pub fn body(&self) -> Option<&Value> {
        match self {
            AdminError::RemoteApi { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Consume the error, yielding the raw response body of a remote API failure
    pub fn into_body(self) -> Option<Value> {
        match self {
            AdminError::RemoteApi { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AdminError {
    fn from(err: reqwest::Error) -> Self {
        AdminError::Transport(Box::new(err))
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        AdminError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required configuration: {key}")]
    MissingRequired { key: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl From<ConfigError> for AdminError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::MissingRequired { key } => AdminError::Configuration {
                message: format!("Missing required configuration: {key}"),
            },
            ConfigError::InvalidValue { key, message } => AdminError::Configuration {
                message: format!("Invalid value for {key}: {message}"),
            },
        }
    }
}
