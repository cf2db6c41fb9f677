// src/utils/mod.rs
//! Shared configuration and error types

pub mod config;
pub mod errors;

pub use config::StoreConfig;
pub use errors::{DucksError, Result};
