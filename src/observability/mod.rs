// src/observability/mod.rs
//! Logging setup
//!
//! The library only emits `tracing` events and `metrics` counters; installing
//! a subscriber or exporter is left to the binary. These helpers cover the
//! common case.
//!
//! Filtering follows `RUST_LOG` and defaults to `info`. Set
//! `RUST_LOG=ducks_middleware=trace` to see every dispatched action.

use crate::utils::errors::{DucksError, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a human-readable subscriber
pub fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .try_init()
        .map_err(|e| DucksError::ObservabilityError(format!("Failed to init tracing: {}", e)))
}

/// Install a JSON subscriber, one event per line
pub fn init_tracing_json() -> Result<()> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter())
        .with_current_span(false)
        .try_init()
        .map_err(|e| DucksError::ObservabilityError(format!("Failed to init tracing: {}", e)))
}
