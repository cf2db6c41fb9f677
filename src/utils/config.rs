// src/utils/config.rs
//! Store configuration
//!
//! Values come from an optional `ducks.toml` file and `DUCKS_*` environment
//! variables, e.g. `DUCKS_MAX_DISPATCH_DEPTH=128`.

use crate::utils::errors::{DucksError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Default file looked up by [`StoreConfig::load`]
pub const DEFAULT_CONFIG_FILE: &str = "ducks.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "DUCKS";

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store name, used as a metrics label and in log output
    pub name: String,

    /// Maximum nesting of re-entrant dispatches into this store on one thread
    pub max_dispatch_depth: usize,

    /// Emit a trace event for every dispatched action
    pub trace_actions: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            max_dispatch_depth: 256,
            trace_actions: true,
        }
    }
}

impl StoreConfig {
    /// Load from `ducks.toml` (if present) and the environment
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_settings(settings)
    }

    /// Load from an explicit file; the format follows the file extension
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading store configuration from {:?}", path);

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .build()?;

        Self::from_settings(settings)
    }

    fn from_settings(settings: config::Config) -> Result<Self> {
        let config: StoreConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the store cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(DucksError::ConfigError(
                "store name must not be empty".to_string(),
            ));
        }

        if self.max_dispatch_depth == 0 {
            return Err(DucksError::ConfigError(
                "max_dispatch_depth must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_max_dispatch_depth(mut self, depth: usize) -> Self {
        self.max_dispatch_depth = depth;
        self
    }
}
