// src/ducks/mod.rs
//! Duck modules and the interceptor composer
//!
//! - **Duck**: module descriptor with an optional interceptor
//! - **Registry**: insertion-ordered mapping of unique keys to ducks
//! - **Composer**: folds every duck's interceptor into one middleware
//!
//! # Example
//!
//! ```
//! use ducks_middleware::{apply_middleware, compose_interceptors, Duck, DuckRegistry, Store};
//! use serde_json::{json, Value};
//!
//! let ducks: DuckRegistry<i64, Value> = DuckRegistry::new().with("inert", Duck::new());
//! let middleware = compose_interceptors(&ducks);
//!
//! let store = Store::with_enhancer(
//!     |state: &i64, action: &Value| if action["type"] == "INCREMENT" { state + 1 } else { *state },
//!     0,
//!     apply_middleware(vec![middleware]),
//! );
//! store.dispatch(json!({ "type": "INCREMENT" })).unwrap();
//! assert_eq!(store.get_state(), 1);
//! ```

pub mod composer;
pub mod duck;
pub mod registry;

// Re-export commonly used types
pub use composer::compose_interceptors;
pub use duck::Duck;
pub use registry::DuckRegistry;
