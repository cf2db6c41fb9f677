// src/middleware/mod.rs
//! Middleware chain primitives
//!
//! - **Handler**: per-action function, may forward zero or more times
//! - **Link**: wraps the next handler into a new one
//! - **Middleware**: per-store factory producing a link
//! - **Compose**: right-to-left fold of links around a terminal handler
//!
//! # Architecture
//!
//! ```text
//! dispatch(action)
//!     │
//!     ├─ Handler 0 (first middleware)
//!     │     └─ Handler 1
//!     │           └─ ...
//!     │                 └─ forward → reducer
//! ```

pub mod compose;
pub mod handler;

// Re-export commonly used types
pub use compose::{chain, compose};
pub use handler::{Handler, Link, Middleware};
