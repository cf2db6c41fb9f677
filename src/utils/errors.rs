// src/utils/errors.rs
//! Error types shared by the store and the middleware chain

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, DucksError>;

/// Errors surfaced by a dispatch or by configuration loading
///
/// The composer itself never produces these: whatever a handler returns is
/// handed back unchanged to the caller of `dispatch`.
#[derive(Debug, Error)]
pub enum DucksError {
    /// A middleware called `dispatch` while the chain was being built
    #[error("Dispatching while constructing middleware is not allowed")]
    DispatchDuringConstruction,

    /// The store behind a middleware API handle no longer exists
    #[error("Store has been dropped")]
    StoreDropped,

    /// Re-entrant dispatch nested deeper than the configured limit
    #[error("Dispatch depth limit of {limit} exceeded")]
    DispatchDepthExceeded { limit: usize },

    /// Raised by interceptors that reject an action
    #[error("Interception failed: {0}")]
    InterceptionFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Observability error: {0}")]
    ObservabilityError(String),
}

impl From<config::ConfigError> for DucksError {
    fn from(err: config::ConfigError) -> Self {
        DucksError::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DucksError::DispatchDepthExceeded { limit: 8 };
        assert_eq!(err.to_string(), "Dispatch depth limit of 8 exceeded");

        let err = DucksError::InterceptionFailed("negative balance".to_string());
        assert_eq!(err.to_string(), "Interception failed: negative balance");
    }

    #[test]
    fn test_config_error_conversion() {
        let err: DucksError = config::ConfigError::Message("bad key".to_string()).into();
        assert!(matches!(err, DucksError::ConfigError(ref msg) if msg.contains("bad key")));
    }
}
