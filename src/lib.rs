// src/lib.rs
//! Ducks Middleware Library
//!
//! Aggregates independently defined "duck" modules into a single middleware
//! chain for a unidirectional state store.
//!
//! # Architecture
//!
//! The crate is structured into a few small modules:
//!
//! - **ducks**: duck descriptors, the ordered registry, and the composer
//! - **middleware**: handler / link / middleware types and right-to-left composition
//! - **store**: minimal synchronous store that middleware is installed into
//! - **action**: the action discriminator trait
//! - **observability**: tracing subscriber setup
//! - **utils**: configuration and error types
//!
//! ```text
//! DuckRegistry ──compose_interceptors──▶ Middleware
//!                                           │
//!                          apply_middleware ▼
//! Store::with_enhancer(reducer, initial, StoreEnhancer)
//! ```

// Public module exports
pub mod action;
pub mod ducks;
pub mod middleware;
pub mod observability;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use action::Action;
pub use ducks::{compose_interceptors, Duck, DuckRegistry};
pub use middleware::{Handler, Link, Middleware};
pub use store::{apply_middleware, MiddlewareApi, Store, StoreEnhancer};
pub use utils::config::StoreConfig;
pub use utils::errors::{DucksError, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
