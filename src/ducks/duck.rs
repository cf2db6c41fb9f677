// src/ducks/duck.rs
//! Duck module descriptor

use crate::middleware::Middleware;
use std::fmt;

/// A self-contained module that may contribute an interceptor
///
/// The interceptor is an explicit optional capability: a duck without one is
/// valid and contributes nothing to the composed chain.
pub struct Duck<S, A> {
    middleware: Option<Middleware<S, A>>,
}

impl<S, A> Duck<S, A> {
    /// Duck without an interceptor
    pub fn new() -> Self {
        Self { middleware: None }
    }

    pub fn with_middleware(mut self, middleware: Middleware<S, A>) -> Self {
        self.middleware = Some(middleware);
        self
    }

    pub fn middleware(&self) -> Option<&Middleware<S, A>> {
        self.middleware.as_ref()
    }

    pub fn has_middleware(&self) -> bool {
        self.middleware.is_some()
    }
}

impl<S, A> Default for Duck<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> From<Middleware<S, A>> for Duck<S, A> {
    fn from(middleware: Middleware<S, A>) -> Self {
        Self::new().with_middleware(middleware)
    }
}

impl<S, A> Clone for Duck<S, A> {
    fn clone(&self) -> Self {
        Self {
            middleware: self.middleware.clone(),
        }
    }
}

impl<S, A> fmt::Debug for Duck<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Duck")
            .field("has_middleware", &self.has_middleware())
            .finish()
    }
}
