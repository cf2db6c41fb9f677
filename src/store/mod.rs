// src/store/mod.rs
//! Minimal synchronous state store
//!
//! Provides the collaborator a middleware chain is installed into:
//!
//! - **Store**: state, reducer and the middleware-wrapped dispatch
//! - **MiddlewareApi**: `get_state` / `dispatch` handle given to middleware
//! - **Enhancer**: `apply_middleware` installs middleware at creation time
//! - **Depth guard**: bounds re-entrant dispatch per thread
//!
//! # Architecture
//!
//! ```text
//! store.dispatch(action)
//!     │
//!     ├─ depth guard
//!     ├─ middleware chain (outermost first)
//!     │      └─ api.dispatch(..) re-enters at the top
//!     └─ base dispatch → reducer(&state, &action) → new state
//! ```

pub mod depth;
pub mod enhancer;
pub mod state_store;

// Re-export commonly used types
pub use enhancer::{apply_middleware, StoreEnhancer};
pub use state_store::{MiddlewareApi, Reducer, Store};
